//! Entry point invocation
//!
//! Calls a registered solution with the argument shape its platform supplies.
//! Panics are caught at this boundary and surface as `SolutionExecution`
//! errors, the same way returned errors do.

use crate::{EntryPoint, EntryShape, HarnessError, Outcome, SolutionDef};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Data handed to an entry point for one call
#[derive(Debug, Clone, Copy)]
pub enum InvocationInput<'a> {
    /// Nothing; the solution reads stdin or needs no input
    None,
    /// Test selector for solutions with hard-coded inputs
    Test(u8),
    /// Cached input file lines
    Lines(&'a [String]),
}

impl InvocationInput<'_> {
    /// Shape of the argument this input provides
    pub fn shape(&self) -> EntryShape {
        match self {
            InvocationInput::None => EntryShape::NoInput,
            InvocationInput::Test(_) => EntryShape::TestSelector,
            InvocationInput::Lines(_) => EntryShape::Lines,
        }
    }
}

/// A panic raised inside a solution
#[derive(Debug, Error)]
#[error("panicked: {message}")]
pub struct SolutionPanic {
    /// Panic payload rendered as text
    pub message: String,
}

/// Invoke a solution once.
///
/// A shape mismatch between the registered entry point and the supplied input
/// is reported as `EntryPointNotFound`; anything the solution itself raises is
/// wrapped in `SolutionExecution`.
pub fn invoke(def: &SolutionDef, input: InvocationInput<'_>) -> Result<(), HarnessError> {
    let outcome = match (def.entry, input) {
        (EntryPoint::NoInput(f), InvocationInput::None) => catch(f),
        (EntryPoint::TestSelector(f), InvocationInput::Test(test)) => catch(|| f(test)),
        (EntryPoint::Lines(f), InvocationInput::Lines(lines)) => catch(|| f(lines)),
        (entry, input) => {
            return Err(HarnessError::EntryPointNotFound {
                platform: def.platform.to_string(),
                name: def.name.to_string(),
                detail: format!(
                    "the solution takes {} but {} supplies {}",
                    entry.shape(),
                    def.platform,
                    input.shape()
                ),
            });
        }
    };

    outcome.map_err(|source| HarnessError::SolutionExecution {
        name: def.qualified_name(),
        source,
    })
}

fn catch(f: impl FnOnce() -> Outcome) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => Err(Box::new(SolutionPanic {
            message: panic_message(payload.as_ref()),
        })),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
