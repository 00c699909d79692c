//! The state machine record: a bounded stack of active states.

use super::state::State;
use serde::{Deserialize, Serialize};

/// A pushdown state machine record.
///
/// The record is plain data: a stack of at most `N` states whose last entry
/// is the active one. It is created empty by its host and only ever mutated
/// by a [`Handler`](crate::handler::Handler) while bound. An empty stack
/// means the machine has never been started.
///
/// Capacity for all `N` states is reserved up front, so pushing never
/// allocates.
///
/// # Example
///
/// ```rust
/// use pushdown_fsm::core::StateMachine;
/// use pushdown_fsm::state_enum;
///
/// state_enum! {
///     enum Mode {
///         Idle,
///         Busy,
///     }
/// }
///
/// let machine: StateMachine<Mode> = StateMachine::new();
/// assert!(machine.is_empty());
/// assert_eq!(machine.top(), None);
/// assert_eq!(machine.capacity(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateMachine<S: State> {
    stack: Vec<S>,
}

impl<S: State> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateMachine<S> {
    /// Create an empty, never-started record.
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(S::count()),
        }
    }

    /// The active state, if the machine has been started.
    pub fn top(&self) -> Option<S> {
        self.stack.last().copied()
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True until the machine is first bound to a handler.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Maximum depth: the number of declared states.
    pub fn capacity(&self) -> usize {
        S::count()
    }

    /// States from the bottom of the stack to the active one.
    pub fn stack(&self) -> &[S] {
        &self.stack
    }

    pub(crate) fn push_state(&mut self, state: S) {
        self.stack.push(state);
    }

    pub(crate) fn pop_state(&mut self) -> Option<S> {
        self.stack.pop()
    }

    pub(crate) fn replace_top(&mut self, state: S) {
        if let Some(top) = self.stack.last_mut() {
            *top = state;
        }
    }

    pub(crate) fn reserve_capacity(&mut self) {
        let missing = S::count().saturating_sub(self.stack.len());
        self.stack.reserve_exact(missing);
    }
}
