//! Benchmark Table
//!
//! Renders two [`Statistics`] side by side:
//!
//! ```text
//! +-------------------------------------------------+-------------------------------------------------+
//! | Benchmark results (runtime, all runs):          | Benchmark results (runtime, last 80% of runs):  |
//! |  * Runs     : X[...]                            |  * Runs     : X[...]                            |
//! |  * Mean     : XXXXXXX.XXX ms / XXXXXXXXXX.X µs  |  * Mean     : XXXXXXX.XXX ms / XXXXXXXXXX.X µs  |
//! |-------------------------------------------------+-------------------------------------------------|
//! |  * Min      : XXXXXXX.XXX ms / XXXXXXXXXX.X µs  |  * Min      : XXXXXXX.XXX ms / XXXXXXXXXX.X µs  |
//! |  ...                                            |  ...                                            |
//! |  * Σ(time)  : XXXXXXX.XXX  s /  HHHH:MM:SS.III  |  * Σ(time)  : XXXXXXX.XXX  s /  HHHH:MM:SS.III  |
//! +-------------------------------------------------+-------------------------------------------------+
//! ```
//!
//! Every row is [`ROW_WIDTH`] characters as long as no field outgrows its
//! column; [`exceeds_table_capacity`] reports when one does.

use crate::units::{format_micros, format_millis, format_seconds};
use solvekit_stats::Statistics;

/// Width of one panel between the borders
pub const PANEL_WIDTH: usize = 49;

/// Width of a full table row including borders
pub const ROW_WIDTH: usize = 2 * PANEL_WIDTH + 3;

const LABEL_WIDTH: usize = 9;
const MILLIS_WIDTH: usize = 11;
const MICROS_WIDTH: usize = 12;
const SECONDS_WIDTH: usize = 11;
const RUNS_WIDTH: usize = 32;
const CLOCK_WIDTH: usize = 14;

const ALL_RUNS_TITLE: &str = " Benchmark results (runtime, all runs):";
const STEADY_RUNS_TITLE: &str = " Benchmark results (runtime, last 80% of runs):";

fn border() -> String {
    format!("+{0}+{0}+", "-".repeat(PANEL_WIDTH))
}

fn divider() -> String {
    format!("|{0}+{0}|", "-".repeat(PANEL_WIDTH))
}

fn row(left: &str, right: &str) -> String {
    format!("|{left}|{right}|")
}

fn title_cell(title: &str) -> String {
    format!("{title:<PANEL_WIDTH$}")
}

fn runs_cell(runs: usize) -> String {
    format!("  * {:<LABEL_WIDTH$}: {:<RUNS_WIDTH$}  ", "Runs", runs)
}

fn metric_cell(label: &str, nanos: u64) -> String {
    format!(
        "  * {:<LABEL_WIDTH$}: {:<MILLIS_WIDTH$} ms / {:<MICROS_WIDTH$} µs  ",
        label,
        format_millis(nanos),
        format_micros(nanos)
    )
}

fn total_cell(stats: &Statistics) -> String {
    format!(
        "  * {:<LABEL_WIDTH$}: {:<SECONDS_WIDTH$}  s /  {}  ",
        "Σ(time)",
        format_seconds(&stats.total),
        stats.breakdown
    )
}

/// Per-row metrics in display order
fn metrics(stats: &Statistics) -> [(&'static str, u64); 6] {
    [
        ("Min", stats.min),
        ("Q1", stats.q1),
        ("Median", stats.median),
        ("Q3", stats.q3),
        ("Max", stats.max),
        ("Stddev[σ]", stats.std_dev),
    ]
}

/// Render the full dual-panel table, one line per row, newline-terminated.
pub fn format_benchmark_table(all: &Statistics, steady: &Statistics) -> String {
    let mut lines = vec![
        border(),
        row(&title_cell(ALL_RUNS_TITLE), &title_cell(STEADY_RUNS_TITLE)),
        row(&runs_cell(all.runs), &runs_cell(steady.runs)),
        row(
            &metric_cell("Mean", all.mean),
            &metric_cell("Mean", steady.mean),
        ),
        divider(),
    ];

    for ((label, left), (_, right)) in metrics(all).into_iter().zip(metrics(steady)) {
        lines.push(row(&metric_cell(label, left), &metric_cell(label, right)));
    }

    lines.push(row(&total_cell(all), &total_cell(steady)));
    lines.push(border());

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Whether any value of `stats` is too wide for its fixed-width column.
///
/// Happens once the aggregate runtime passes 9,999,999 seconds (about 115 days)
/// or a single sample passes 9,999,999.999 ms.
pub fn exceeds_table_capacity(stats: &Statistics) -> bool {
    let widest_sample = stats.max.max(stats.std_dev);
    format_millis(widest_sample).len() > MILLIS_WIDTH
        || format_micros(widest_sample).len() > MICROS_WIDTH
        || format_seconds(&stats.total).len() > SECONDS_WIDTH
        || stats.breakdown.to_string().len() > CLOCK_WIDTH
}

/// `Runtime: {µs} µs / {ms} ms` for a single run
pub fn format_runtime_summary(nanos: u64) -> String {
    format!(
        "Runtime: {} µs / {} ms",
        format_micros(nanos),
        format_millis(nanos)
    )
}

/// `Iteration {i}: {ms} ms / {µs} µs`, the index padded to `index_width`
pub fn format_iteration_line(index: usize, index_width: usize, nanos: u64) -> String {
    format!(
        "Iteration {index:<index_width$}: {} ms / {} µs",
        format_millis(nanos),
        format_micros(nanos)
    )
}
