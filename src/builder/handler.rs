//! Builder for constructing handlers.

use crate::builder::error::BuildError;
use crate::core::{State, Transition, TransitionGraph, TransitionTable};
use crate::handler::{Behavior, BehaviorRegistry, Handler};
use tracing::debug;

/// Builder for constructing a [`Handler`] with a fluent API.
///
/// # Example
///
/// ```
/// use pushdown_fsm::builder::HandlerBuilder;
/// use pushdown_fsm::handler::Behavior;
/// use pushdown_fsm::state_enum;
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// struct Closed;
/// impl Behavior<Door, ()> for Closed {
///     fn state(&self) -> Door { Door::Closed }
/// }
///
/// struct Open;
/// impl Behavior<Door, ()> for Open {
///     fn state(&self) -> Door { Door::Open }
/// }
///
/// let handler = HandlerBuilder::<Door, ()>::new()
///     .behavior(Closed)
///     .behavior(Open)
///     .transition(Door::Closed, [Door::Open])
///     .transition(Door::Open, [Door::Closed])
///     .build()
///     .unwrap();
///
/// assert!(handler.allows(Door::Open, Door::Closed));
/// ```
pub struct HandlerBuilder<S: State, D> {
    behaviors: Vec<Box<dyn Behavior<S, D>>>,
    transitions: TransitionTable<S>,
}

impl<S: State, D> HandlerBuilder<S, D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            behaviors: Vec::new(),
            transitions: TransitionTable::new(),
        }
    }

    /// Register the behavior for one state.
    pub fn behavior<B>(mut self, behavior: B) -> Self
    where
        B: Behavior<S, D> + 'static,
    {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Register several boxed behaviors at once.
    pub fn behaviors(mut self, behaviors: Vec<Box<dyn Behavior<S, D>>>) -> Self {
        self.behaviors.extend(behaviors);
        self
    }

    /// Allow `from` to move to each of `targets`.
    pub fn transition(mut self, from: S, targets: impl IntoIterator<Item = S>) -> Self {
        self.transitions.push(Transition::new(from, targets));
        self
    }

    /// Add every row of a transition table.
    pub fn transitions(mut self, table: TransitionTable<S>) -> Self {
        self.transitions.extend(table);
        self
    }

    /// Build the handler.
    ///
    /// Every declared state needs exactly one behavior, and every state named
    /// by a behavior or a transition row must index into `0..N`. The
    /// transition table is checked first. `on_setup` runs on each behavior,
    /// in state order, once both tables are known to be valid.
    pub fn build(self) -> Result<Handler<S, D>, BuildError> {
        if S::count() == 0 {
            return Err(BuildError::EmptyStateSet);
        }

        let graph = TransitionGraph::from_table(&self.transitions)?;
        let registry = BehaviorRegistry::from_behaviors(self.behaviors)?;
        debug!(
            states = S::count(),
            transitions = self.transitions.entries().len(),
            "built state machine handler"
        );

        Ok(Handler::from_parts(graph, registry))
    }
}

impl<S: State, D> Default for HandlerBuilder<S, D> {
    fn default() -> Self {
        Self::new()
    }
}
