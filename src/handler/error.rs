//! Errors raised by stack operations.

use thiserror::Error;

/// Errors that can occur while driving a bound state machine.
///
/// Validation errors are raised before any hook fires, so the machine is left
/// exactly as it was. [`FsmError::Interrupted`] and the re-checks made after a
/// leaving hook are raised once that hook has run; the stack then holds
/// whatever the hook left behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// The transition graph has no `from -> to` edge.
    #[error("Invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    /// Push attempted with every slot of the stack already in use.
    #[error("Stack overflow: cannot push beyond {capacity} states")]
    StackOverflow { capacity: usize },

    /// Pop attempted with no paused state left to resume.
    #[error("Stack underflow: cannot pop with depth {depth}")]
    StackUnderflow { depth: usize },

    /// A record handed to the handler holds a state outside `0..N`.
    #[error("State '{state}' (index {index}) is not declared")]
    UnknownState { state: String, index: usize },

    /// A hook of the state being left moved the machine itself, so the
    /// transition that fired the hook was abandoned.
    #[error("Transition out of '{state}' was interrupted by its own hook")]
    Interrupted { state: String },
}
