#![warn(missing_docs)]
//! # SolveKit
//!
//! Runner and benchmark harness for competitive-programming and puzzle solutions.
//!
//! SolveKit runs solutions written for seven judging platforms and measures them:
//! - **Link-time Registry**: `#[solution]` registers an entry point under its platform; no reflection
//! - **Platform Input Disciplines**: input lines as an argument, a test selector, or a file fed to stdin
//! - **Output Suppression**: solution output is discarded while timing, restored on every exit path
//! - **Exact Statistics**: quartiles, mean and population standard deviation over integer nanoseconds
//! - **Warm-up Trimming**: every report shows all runs next to the last 80% of runs
//! - **Sample Export**: raw nanosecond timings saved to a locked `runtimes_{timestamp}.csv`
//!
//! ## Quick Start
//!
//! ```ignore
//! #[solvekit::solution(platform = "AdventOfCode")]
//! fn y2015_d01p1(input: &[String]) {
//!     let floor: i64 = input[0].chars().map(|c| if c == '(' { 1 } else { -1 }).sum();
//!     println!("{floor}");
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     solvekit::run()
//! }
//! ```
//!
//! Run it with `AdventOfCode.y2015_d01p1-1`, or benchmark it with
//! `AdventOfCode.y2015_d01p1-1B500S`.
//!
//! ## Reading Standard Input
//!
//! ```ignore
//! #[solvekit::solution(platform = "SPOJ")]
//! fn p1() -> std::io::Result<()> {
//!     for line in std::io::stdin().lines() {
//!         let line = line?;
//!         if line == "42" {
//!             break;
//!         }
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

// Re-export core types
pub use solvekit_core::{
    EntryPoint, EntryShape, HarnessError, InvocationInput, MAX_TEST_NUMBER, Outcome,
    OutputSuppression, SolutionDef, SolutionFailure, SolutionPanic, SolutionSpecifier, StdinFeed,
    Timer, find_solution, invoke, solutions,
};

// Re-export macros
pub use solvekit_macros::solution;

// Re-export stats
pub use solvekit_stats::{SampleSet, Statistics, TimeBreakdown};

// Re-export report
pub use solvekit_report::{ExportOutcome, format_benchmark_table, save_samples};

// Re-export runner
pub use solvekit_cli::{
    BenchmarkStatistics, ConsoleProgress, ExecutionConfig, FileLinesPlatform, Invocation,
    NoInputPlatform, PlatformHandler, PlatformRegistry, ProgressReporter, RunMode,
    SolveKitConfig, StdinPlatform, compute_statistics, resolve_solution, run_many, run_once,
};

/// Internal re-exports for macro use
#[doc(hidden)]
pub mod internal {
    pub use inventory;
    pub use solvekit_core::IntoOutcome;
}

/// Run the SolveKit CLI harness.
///
/// Call this from your solutions binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     solvekit::run()
/// }
/// ```
pub use solvekit_cli::run;
