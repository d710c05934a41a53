//! Output Formatting
//!
//! Assembles the text printed around a run: the single-run footer, the
//! benchmark report with its heading, and failure messages with their hints.

use super::statistics::BenchmarkStatistics;
use solvekit_core::HarnessError;
use solvekit_report::{exceeds_table_capacity, format_benchmark_table, format_runtime_summary};

/// Width of the dashed separator printed after a single run
pub const SEPARATOR_WIDTH: usize = 51;

/// Separator and runtime line printed after a single run
pub fn format_single_run(nanos: u64) -> String {
    format!(
        "\n{}\n{}\n",
        "-".repeat(SEPARATOR_WIDTH),
        format_runtime_summary(nanos)
    )
}

/// Heading plus dual-panel table for a finished benchmark.
///
/// Appends a warning when a value no longer fits its column.
pub fn format_benchmark_report(solution: &str, stats: &BenchmarkStatistics) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nBenchmarking results for solution {}:\n", solution));
    output.push_str(&format_benchmark_table(&stats.all, &stats.steady));

    if exceeds_table_capacity(&stats.all) || exceeds_table_capacity(&stats.steady) {
        output.push_str(
            "\nWarning: some values are too large for the table and are shown misaligned.\n\
             Append S to the benchmark argument to save the raw samples instead.\n",
        );
    }

    output
}

/// Error message followed by its recovery hint
pub fn format_failure(error: &HarnessError) -> String {
    format!("\nError: {}\n\n{}\n", error, error.hint())
}
