//! The handler: owner of the transition graph and the behavior registry.

use super::behavior::{Behavior, BehaviorRegistry};
use super::bound::Bound;
use super::error::FsmError;
use crate::builder::{BuildError, HandlerBuilder};
use crate::core::{Context, State, StateMachine, TransitionGraph, TransitionTable};

/// Drives pushdown state machine records.
///
/// A handler is built once from a behavior table and a transition table and
/// can then drive any number of [`StateMachine`] records, one at a time.
/// Records are plain data; all of their mutation goes through the handler
/// while bound.
///
/// # Example
///
/// ```rust
/// use pushdown_fsm::core::{Context, StateMachine};
/// use pushdown_fsm::handler::{Behavior, Handler};
/// use pushdown_fsm::{state_enum, transitions};
///
/// state_enum! {
///     enum Robot {
///         Idle,
///         Moving,
///     }
/// }
///
/// struct Idle;
/// impl Behavior<Robot, ()> for Idle {
///     fn state(&self) -> Robot { Robot::Idle }
/// }
///
/// struct Moving;
/// impl Behavior<Robot, ()> for Moving {
///     fn state(&self) -> Robot { Robot::Moving }
/// }
///
/// let mut handler: Handler<Robot, ()> = Handler::new(
///     vec![Box::new(Idle), Box::new(Moving)],
///     transitions![Robot::Idle => [Robot::Moving]],
/// )
/// .unwrap();
///
/// let mut machine = StateMachine::new();
/// let mut ctx = Context::new(());
///
/// let mut fsm = handler.set_handling(&mut machine, &mut ctx).unwrap();
/// assert_eq!(fsm.top(), Some(Robot::Idle));
/// fsm.jump(&mut ctx, Robot::Moving).unwrap();
/// assert!(fsm.jump(&mut ctx, Robot::Idle).is_err());
/// fsm.clear_handling();
///
/// assert_eq!(machine.top(), Some(Robot::Moving));
/// ```
pub struct Handler<S: State, D> {
    graph: TransitionGraph<S>,
    registry: BehaviorRegistry<S, D>,
}

impl<S: State, D> Handler<S, D> {
    /// Build a handler from a behavior table and a transition table.
    pub fn new(
        behaviors: Vec<Box<dyn Behavior<S, D>>>,
        transitions: TransitionTable<S>,
    ) -> Result<Self, BuildError> {
        HandlerBuilder::new()
            .behaviors(behaviors)
            .transitions(transitions)
            .build()
    }

    /// Start a [`HandlerBuilder`].
    pub fn builder() -> HandlerBuilder<S, D> {
        HandlerBuilder::new()
    }

    pub(crate) fn from_parts(graph: TransitionGraph<S>, registry: BehaviorRegistry<S, D>) -> Self {
        Self { graph, registry }
    }

    /// The adjacency graph every jump and push is checked against.
    pub fn graph(&self) -> &TransitionGraph<S> {
        &self.graph
    }

    /// The behavior registered for `state`, if `state` is declared.
    pub fn behavior(&self, state: S) -> Option<&dyn Behavior<S, D>> {
        self.registry.try_get(state)
    }

    /// Check whether the graph permits `from -> to` (pure).
    pub fn allows(&self, from: S, to: S) -> bool {
        self.graph.allows(from, to)
    }

    /// Bind a record so it can be driven.
    ///
    /// A record that has never been started is entered at the first declared
    /// state (index 0) without consulting the transition graph, since there is
    /// no state to leave. This is the only unchecked transition: afterwards
    /// every jump and push is validated against the active state, so a
    /// machine can reach other states only by following the graph from state
    /// 0. A record that already has a stack resumes where it left off, and no
    /// hooks fire. A record holding an undeclared state, or more states than
    /// its capacity, is refused.
    ///
    /// The handler stays mutably borrowed until the returned [`Bound`] is
    /// dropped, so at most one record is bound at a time.
    pub fn set_handling<'h, 'm>(
        &'h mut self,
        machine: &'m mut StateMachine<S>,
        ctx: &mut Context<D>,
    ) -> Result<Bound<'h, 'm, S, D>, FsmError> {
        if let Some(stray) = machine.stack().iter().find(|s| s.index() >= S::count()) {
            return Err(FsmError::UnknownState {
                state: stray.name().to_string(),
                index: stray.index(),
            });
        }
        if machine.depth() > machine.capacity() {
            return Err(FsmError::StackOverflow {
                capacity: machine.capacity(),
            });
        }

        let this: &'h Self = self;
        let starting = machine.is_empty();
        let mut bound = Bound::new(&this.graph, &this.registry, machine);
        if starting {
            bound.bootstrap(ctx)?;
        }
        Ok(bound)
    }
}
