#![warn(missing_docs)]
//! SolveKit Report - Rendering and Export
//!
//! Turns benchmark statistics into output:
//! - Fixed-width dual-panel table (all runs next to the last 80% of runs)
//! - One-line runtime summaries and per-iteration progress lines
//! - Raw per-iteration samples written to a locked `runtimes_{timestamp}.csv`
//!
//! Decimal values are derived from integer nanoseconds with round-half-up,
//! never through binary floating point.

mod export;
mod table;
mod units;

pub use export::{ExportOutcome, export_file_name, save_samples};
pub use table::{
    PANEL_WIDTH, ROW_WIDTH, exceeds_table_capacity, format_benchmark_table,
    format_iteration_line, format_runtime_summary,
};
pub use units::{fixed_point, format_micros, format_millis, format_seconds};
