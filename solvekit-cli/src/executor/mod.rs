//! Solution Executor
//!
//! Runs a solution and turns its timings into printable output.
//!
//! ## Pipeline Overview
//!
//! ```text
//! SolutionDef (registered via #[solution])
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Provision input, run once or N times, collect samples
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Summaries for all runs and the trimmed tail (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Runtime footer, benchmark table, failures
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Single runs and the benchmark loop
//! - [`progress`] - Per-iteration lines and the progress bar
//! - [`statistics`] - Parallel statistics computation
//! - [`formatting`] - Human-readable output formatting

mod execution;
mod formatting;
mod progress;
mod statistics;

// Re-export public API
pub use execution::{ExecutionConfig, MIN_ITERATIONS, resolve_solution, run_many, run_once};
pub use formatting::{SEPARATOR_WIDTH, format_benchmark_report, format_failure, format_single_run};
pub use progress::{ConsoleProgress, ProgressReporter};
pub use statistics::{BenchmarkStatistics, compute_statistics};
