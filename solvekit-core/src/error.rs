//! Harness error taxonomy

use crate::SolutionFailure;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the harness recognizes and reports to the user.
///
/// Validation errors (`UnknownPlatform`, `InvalidIterationCount`, `InvalidTestNumber`,
/// `ArgumentParse`) are raised before any timed work begins.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Platform identifier is not in the registry
    #[error("Invalid platform name '{name}'. Platform name must be one of the following: {}", .available.join(", "))]
    UnknownPlatform {
        /// Requested identifier
        name: String,
        /// Supported identifiers
        available: Vec<&'static str>,
    },

    /// No matching entry point could be resolved
    #[error("Could not resolve solution {platform}.{name}: {detail}")]
    EntryPointNotFound {
        /// Platform identifier
        platform: String,
        /// Requested entry point name
        name: String,
        /// Why resolution failed
        detail: String,
    },

    /// Input file missing or unreadable
    #[error("The input file {} couldn't be opened: {source}", .path.display())]
    InputNotFound {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Fewer than three benchmark iterations requested
    #[error("Benchmarking iterations must be > 2 (got {0})")]
    InvalidIterationCount(usize),

    /// Test number outside `0..=9`
    #[error("Invalid test number {0}. Test numbers must be integers in the range [0, 9]")]
    InvalidTestNumber(i64),

    /// The solution returned an error or panicked
    #[error("Solution {name} failed: {source}")]
    SolutionExecution {
        /// `Platform.Name` of the failing solution
        name: String,
        /// Error raised by the solution
        #[source]
        source: SolutionFailure,
    },

    /// Raw sample export failed
    #[error("Couldn't save benchmark results: {0}")]
    ExportFailed(#[source] io::Error),

    /// Invocation token could not be parsed
    #[error("Error parsing argument '{token}': {reason}")]
    ArgumentParse {
        /// Raw token
        token: String,
        /// What was wrong with it
        reason: String,
    },

    /// Standard streams could not be swapped or restored
    #[error("Failed to redirect standard streams: {0}")]
    StreamRedirect(#[source] io::Error),
}

impl HarnessError {
    /// Recovery hint printed alongside the error message
    pub fn hint(&self) -> &'static str {
        match self {
            HarnessError::UnknownPlatform { .. } => {
                "Prefix the solution name with one of the platforms listed above, e.g. ProjectEuler.p1-0."
            }
            HarnessError::EntryPointNotFound { .. } => {
                "Check the solution name and its #[solution(platform = ..)] attribute; `solvekit list` shows every registered solution."
            }
            HarnessError::InputNotFound { .. } => {
                "Create the input file at the path shown, or point --inputs-dir (or [runner] inputs_dir) at the directory holding it."
            }
            HarnessError::InvalidIterationCount(_) => {
                "Benchmark with at least 3 iterations, e.g. AdventOfCode.y2015_d01p1-1B100."
            }
            HarnessError::InvalidTestNumber(_) => "The test number is a single digit from 0 to 9.",
            HarnessError::SolutionExecution { .. } => {
                "The solution itself failed; run it once without B to see its own output."
            }
            HarnessError::ExportFailed(_) => {
                "The results shown above are unaffected; check that the export directory exists and is writable."
            }
            HarnessError::ArgumentParse { .. } => {
                "Expected {Platform}.{Name}-{Test}[B{Iterations}][S], e.g. SPOJ.p1-1B50S."
            }
            HarnessError::StreamRedirect(_) => {
                "The process standard streams could not be swapped; run SolveKit from a regular shell."
            }
        }
    }

    /// Whether this error was raised before any solution code ran
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HarnessError::UnknownPlatform { .. }
                | HarnessError::InvalidIterationCount(_)
                | HarnessError::InvalidTestNumber(_)
                | HarnessError::ArgumentParse { .. }
        )
    }
}
