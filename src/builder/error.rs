//! Errors raised while building a handler.

use crate::core::State;
use thiserror::Error;

/// Errors that can occur when building a handler.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states declared. A state machine needs at least one state")]
    EmptyStateSet,

    #[error("Invalid behavior table: {violations:?}")]
    InvalidSetup { violations: Vec<SetupViolation> },
}

/// A single problem found while registering behaviors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupViolation {
    #[error("State '{state}' is claimed by more than one behavior")]
    DuplicateBehavior { state: String },

    #[error("No behavior registered for state '{state}'")]
    MissingBehavior { state: String },

    #[error("State '{state}' reports index {reported} but is declared at position {expected}")]
    IndexMismatch {
        state: String,
        reported: usize,
        expected: usize,
    },

    #[error("State '{state}' has index {index}, outside the {count} declared states")]
    OutOfRange {
        state: String,
        index: usize,
        count: usize,
    },
}

impl SetupViolation {
    pub(crate) fn out_of_range<S: State>(state: S) -> Self {
        Self::OutOfRange {
            state: state.name().to_string(),
            index: state.index(),
            count: S::count(),
        }
    }
}
