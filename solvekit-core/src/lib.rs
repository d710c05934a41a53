#![warn(missing_docs)]
//! SolveKit Core - Solution Runtime
//!
//! This crate provides the execution environment for solutions:
//! - `SolutionDef` registry populated at link time by `#[solution]`
//! - Panic-safe invocation with the argument shape a platform demands
//! - Nanosecond wall-clock timing
//! - Process-wide standard stream redirection (output suppression, stdin feeding)

mod error;
mod invoke;
mod measure;
mod redirect;

pub use error::HarnessError;
pub use invoke::{InvocationInput, SolutionPanic, invoke};
pub use measure::Timer;
pub use redirect::{OutputSuppression, StdinFeed};

use std::fmt;

/// Error type a solution may fail with
pub type SolutionFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a single solution invocation
pub type Outcome = Result<(), SolutionFailure>;

/// Highest accepted test number
pub const MAX_TEST_NUMBER: u8 = 9;

/// Conversion from a solution's return value into an [`Outcome`].
///
/// Implemented for `()` and for `Result<(), E>` so solutions can either
/// return nothing or propagate their own errors with `?`.
pub trait IntoOutcome {
    /// Convert into an outcome
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
    #[inline]
    fn into_outcome(self) -> Outcome {
        Ok(())
    }
}

impl<E> IntoOutcome for Result<(), E>
where
    E: Into<SolutionFailure>,
{
    #[inline]
    fn into_outcome(self) -> Outcome {
        self.map_err(Into::into)
    }
}

/// Identifies which entry point and which input variant to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSpecifier {
    name: String,
    test: u8,
}

impl SolutionSpecifier {
    /// Create a specifier, rejecting test numbers outside `0..=9`.
    pub fn new(name: impl Into<String>, test: i64) -> Result<Self, HarnessError> {
        let test = u8::try_from(test)
            .ok()
            .filter(|t| *t <= MAX_TEST_NUMBER)
            .ok_or(HarnessError::InvalidTestNumber(test))?;
        Ok(Self {
            name: name.into(),
            test,
        })
    }

    /// Entry point name within the platform namespace
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input variant selector
    pub fn test(&self) -> u8 {
        self.test
    }
}

impl fmt::Display for SolutionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.test)
    }
}

/// Argument shape an entry point accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// No argument at all
    NoInput,
    /// The test number, used to pick hard-coded inputs
    TestSelector,
    /// The lines of the input file
    Lines,
}

impl fmt::Display for EntryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryShape::NoInput => "no argument",
            EntryShape::TestSelector => "a test selector",
            EntryShape::Lines => "input lines",
        };
        f.write_str(s)
    }
}

/// Type-erased entry point produced by `#[solution]`
#[derive(Clone, Copy)]
pub enum EntryPoint {
    /// `fn()`
    NoInput(fn() -> Outcome),
    /// `fn(test)`
    TestSelector(fn(u8) -> Outcome),
    /// `fn(&[String])`
    Lines(fn(&[String]) -> Outcome),
}

impl EntryPoint {
    /// Argument shape of this entry point
    pub fn shape(&self) -> EntryShape {
        match self {
            EntryPoint::NoInput(_) => EntryShape::NoInput,
            EntryPoint::TestSelector(_) => EntryShape::TestSelector,
            EntryPoint::Lines(_) => EntryShape::Lines,
        }
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryPoint").field(&self.shape()).finish()
    }
}

/// Solution definition registered via `#[solvekit::solution]`
#[derive(Debug, Clone)]
pub struct SolutionDef {
    /// Platform identifier, e.g. `AdventOfCode`
    pub platform: &'static str,
    /// Entry point name within the platform
    pub name: &'static str,
    /// Function pointer to the wrapper
    pub entry: EntryPoint,
    /// Source file path
    pub file: &'static str,
    /// Source line number
    pub line: u32,
    /// Module path
    pub module_path: &'static str,
}

impl SolutionDef {
    /// `Platform.Name`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.platform, self.name)
    }
}

// Collect all registered solutions
inventory::collect!(SolutionDef);

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<SolutionDef> {}
};

/// All registered solutions, in link order
pub fn solutions() -> impl Iterator<Item = &'static SolutionDef> {
    inventory::iter::<SolutionDef>.into_iter()
}

/// Look up a registered solution by platform and name
pub fn find_solution(platform: &str, name: &str) -> Option<&'static SolutionDef> {
    solutions().find(|def| def.platform == platform && def.name == name)
}
