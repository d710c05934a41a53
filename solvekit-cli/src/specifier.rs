//! Invocation token parsing
//!
//! A single command-line token selects what to run:
//!
//! ```text
//! {Platform}.{Name}-{Test}[B{Iterations}][S]
//! ```
//!
//! `B{Iterations}` switches to benchmarking and a trailing `S` additionally
//! exports the raw samples. `S` on its own is accepted and ignored.

use regex::Regex;
use solvekit_core::{HarnessError, SolutionSpecifier};
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<platform>[^.]+)\.(?P<name>[^-]+)-(?P<test>[+-]?\d+)(?P<suffix>.*)$")
        .unwrap_or_else(|e| unreachable!("invocation pattern is valid: {e}"))
});

/// Largest accepted `B{Iterations}` value
pub const MAX_ITERATIONS: usize = i32::MAX as usize;

static SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:B(?P<iterations>\d+))?(?P<save>S)?$")
        .unwrap_or_else(|e| unreachable!("suffix pattern is valid: {e}"))
});

/// How the selected solution should be run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Run once, showing the solution's own output
    Once,
    /// Run repeatedly with output suppressed and report statistics
    Benchmark {
        /// Number of timed iterations
        iterations: usize,
        /// Export the raw samples afterwards
        save: bool,
    },
}

/// A parsed invocation token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    platform: String,
    specifier: SolutionSpecifier,
    mode: RunMode,
}

impl Invocation {
    /// Parse a `{Platform}.{Name}-{Test}[B{Iterations}][S]` token.
    ///
    /// Iteration counts above [`MAX_ITERATIONS`] are rejected here; the
    /// benchmark driver rejects counts below three.
    pub fn parse(token: &str) -> Result<Self, HarnessError> {
        let parse_error = |reason: &str| HarnessError::ArgumentParse {
            token: token.to_string(),
            reason: reason.to_string(),
        };

        let caps = TOKEN
            .captures(token.trim())
            .ok_or_else(|| parse_error("expected {Platform}.{Name}-{Test}"))?;

        let test: i64 = caps["test"]
            .parse()
            .map_err(|_| parse_error("test number is not a valid integer"))?;
        let specifier = SolutionSpecifier::new(&caps["name"], test)?;

        let suffix = SUFFIX
            .captures(&caps["suffix"])
            .ok_or_else(|| parse_error("expected only B{Iterations} and/or S after the test number"))?;

        let save = suffix.name("save").is_some();
        let mode = match suffix.name("iterations") {
            Some(iterations) => RunMode::Benchmark {
                iterations: iterations
                    .as_str()
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n <= MAX_ITERATIONS)
                    .ok_or_else(|| parse_error("iteration count is too large"))?,
                save,
            },
            None => {
                if save {
                    tracing::warn!(token, "S without B has no effect; nothing will be saved");
                }
                RunMode::Once
            }
        };

        Ok(Self {
            platform: caps["platform"].to_string(),
            specifier,
            mode,
        })
    }

    /// Platform identifier
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Entry point name and test number
    pub fn specifier(&self) -> &SolutionSpecifier {
        &self.specifier
    }

    /// Run once or benchmark
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// `Platform.Name`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.platform, self.specifier.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_run() {
        let inv = Invocation::parse("AdventOfCode.y2015_d01p1-1").unwrap();
        assert_eq!(inv.platform(), "AdventOfCode");
        assert_eq!(inv.specifier().name(), "y2015_d01p1");
        assert_eq!(inv.specifier().test(), 1);
        assert_eq!(inv.mode(), RunMode::Once);
        assert_eq!(inv.qualified_name(), "AdventOfCode.y2015_d01p1");
    }

    #[test]
    fn parses_benchmark_with_save() {
        let inv = Invocation::parse("SPOJ.p1-0B250S").unwrap();
        assert_eq!(
            inv.mode(),
            RunMode::Benchmark {
                iterations: 250,
                save: true
            }
        );

        let inv = Invocation::parse("Codeforces.p1A-9B3").unwrap();
        assert_eq!(
            inv.mode(),
            RunMode::Benchmark {
                iterations: 3,
                save: false
            }
        );
    }

    #[test]
    fn small_iteration_counts_parse() {
        // Rejected later by the driver, not by the parser
        let inv = Invocation::parse("ProjectEuler.p1-0B2").unwrap();
        assert!(matches!(inv.mode(), RunMode::Benchmark { iterations: 2, .. }));
    }

    #[test]
    fn iteration_count_is_bounded() {
        let inv = Invocation::parse("ProjectEuler.p1-0B2147483647").unwrap();
        assert!(matches!(inv.mode(), RunMode::Benchmark { iterations: MAX_ITERATIONS, .. }));

        for token in ["ProjectEuler.p1-0B2147483648", "ProjectEuler.p1-0B9000000000000000000S"] {
            let err = Invocation::parse(token).unwrap_err();
            match err {
                HarnessError::ArgumentParse { reason, .. } => {
                    assert_eq!(reason, "iteration count is too large");
                }
                other => panic!("{token}: unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn save_without_benchmark_is_ignored() {
        let inv = Invocation::parse("LeetCode.p1-2S").unwrap();
        assert_eq!(inv.mode(), RunMode::Once);
    }

    #[test]
    fn out_of_range_test_numbers() {
        for (token, expected) in [("UVa.p100-10", 10), ("UVa.p100--1", -1), ("UVa.p100-42B5", 42)] {
            let err = Invocation::parse(token).unwrap_err();
            assert!(
                matches!(err, HarnessError::InvalidTestNumber(t) if t == expected),
                "{token}: {err:?}"
            );
        }
    }

    #[test]
    fn malformed_tokens() {
        for token in [
            "",
            "SPOJ",
            "SPOJ.p1",
            "SPOJ.p1-",
            "SPOJ.p1-x",
            ".p1-1",
            "SPOJ.-1",
            "SPOJ.p1-1X",
            "SPOJ.p1-1B",
            "SPOJ.p1-1SB5",
            "SPOJ.p1-1B99999999999999999999999",
        ] {
            let err = Invocation::parse(token).unwrap_err();
            assert!(
                matches!(err, HarnessError::ArgumentParse { .. }),
                "{token:?}: {err:?}"
            );
        }
    }
}
