//! Benchmark progress reporting
//!
//! Every completed iteration prints `Iteration {n}: {ms} ms / {µs} µs` once
//! output suppression has been lifted. An optional indicatif bar on stderr
//! tracks the overall count; lines are printed through `suspend` so the bar
//! never tears them.

use indicatif::{ProgressBar, ProgressStyle};
use solvekit_report::format_iteration_line;

/// Receives progress events from the benchmark driver
pub trait ProgressReporter {
    /// Called once before the first iteration
    fn start(&mut self, _iterations: usize) {}

    /// Called after each iteration; `iteration` counts from 1
    fn iteration(&mut self, iteration: usize, nanos: u64);

    /// Called once after the last iteration, or after a failure
    fn finish(&mut self) {}
}

/// Prints iteration lines to stdout, optionally with a progress bar
pub struct ConsoleProgress {
    show_bar: bool,
    bar: Option<ProgressBar>,
    index_width: usize,
}

impl ConsoleProgress {
    /// Create a reporter; `show_bar` toggles the indicatif bar
    pub fn new(show_bar: bool) -> Self {
        Self {
            show_bar,
            bar: None,
            index_width: 1,
        }
    }
}

impl ProgressReporter for ConsoleProgress {
    fn start(&mut self, iterations: usize) {
        self.index_width = iterations.to_string().len();
        if self.show_bar {
            let pb = ProgressBar::new(iterations as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            self.bar = Some(pb);
        }
    }

    fn iteration(&mut self, iteration: usize, nanos: u64) {
        let line = format_iteration_line(iteration, self.index_width, nanos);
        match &self.bar {
            Some(pb) => {
                pb.suspend(|| println!("{line}"));
                pb.inc(1);
            }
            None => println!("{line}"),
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}
