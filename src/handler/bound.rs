//! Stack operations on a machine bound to a handler.

use super::behavior::BehaviorRegistry;
use super::error::FsmError;
use crate::core::{Context, State, StateMachine, TransitionGraph};
use tracing::{debug, trace};

/// A state machine record bound to a handler.
///
/// Obtained from [`Handler::set_handling`](super::Handler::set_handling).
/// While a `Bound` exists it is the only way to mutate the record, and the
/// handler cannot be bound to anything else. It is also the capability passed
/// to every behavior hook, so behaviors can jump, push or pop from inside
/// their own callbacks.
///
/// Dropping it (or calling [`clear_handling`](Self::clear_handling)) unbinds
/// the record without firing any hooks; the record keeps its stack.
pub struct Bound<'h, 'm, S: State, D> {
    graph: &'h TransitionGraph<S>,
    registry: &'h BehaviorRegistry<S, D>,
    machine: &'m mut StateMachine<S>,
}

impl<'h, 'm, S: State, D> Bound<'h, 'm, S, D> {
    pub(crate) fn new(
        graph: &'h TransitionGraph<S>,
        registry: &'h BehaviorRegistry<S, D>,
        machine: &'m mut StateMachine<S>,
    ) -> Self {
        machine.reserve_capacity();
        Self {
            graph,
            registry,
            machine,
        }
    }

    /// Enter the first declared state of an empty machine.
    ///
    /// There is no state to leave, so the transition graph is not consulted.
    pub(crate) fn bootstrap(&mut self, ctx: &mut Context<D>) -> Result<(), FsmError> {
        let Some(initial) = S::from_index(0) else {
            return Ok(());
        };
        debug!(state = initial.name(), "starting state machine");
        self.machine.push_state(initial);
        let registry = self.registry;
        registry.get(initial).on_enter(self, ctx)
    }

    /// The active state.
    pub fn top(&self) -> Option<S> {
        self.machine.top()
    }

    /// Number of states on the stack, active one included.
    pub fn depth(&self) -> usize {
        self.machine.depth()
    }

    /// States from the bottom of the stack to the active one.
    pub fn stack(&self) -> &[S] {
        self.machine.stack()
    }

    /// Read-only view of the bound record.
    pub fn machine(&self) -> &StateMachine<S> {
        &*self.machine
    }

    /// Whether `jump(to)` would pass validation.
    pub fn can_jump(&self, to: S) -> bool {
        self.top().is_some_and(|from| self.graph.allows(from, to))
    }

    /// Whether `push(to)` would pass validation.
    pub fn can_push(&self, to: S) -> bool {
        self.can_jump(to) && self.depth() < self.machine.capacity()
    }

    fn active(&self) -> Result<S, FsmError> {
        self.top().ok_or(FsmError::StackUnderflow { depth: 0 })
    }

    fn check(&self, to: S) -> Result<S, FsmError> {
        let from = self.active()?;
        if self.graph.allows(from, to) {
            Ok(from)
        } else {
            debug!(from = from.name(), to = to.name(), "rejected transition");
            Err(FsmError::InvalidTransition {
                from: from.name().to_string(),
                to: to.name().to_string(),
            })
        }
    }

    /// Fails if a hook of `from` moved the machine away from `depth`/`from`.
    fn still_at(&self, depth: usize, from: S) -> Result<(), FsmError> {
        if self.depth() == depth && self.top() == Some(from) {
            return Ok(());
        }
        debug!(
            state = from.name(),
            depth = self.depth(),
            "transition interrupted by a hook"
        );
        Err(FsmError::Interrupted {
            state: from.name().to_string(),
        })
    }

    /// Replace the active state with `to`, keeping the stack depth.
    ///
    /// Fires `on_terminate` on the outgoing state, then `on_enter` on `to`.
    /// If `on_terminate` itself transitions the machine, the jump is
    /// abandoned with [`FsmError::Interrupted`].
    pub fn jump(&mut self, ctx: &mut Context<D>, to: S) -> Result<(), FsmError> {
        let from = self.check(to)?;
        let depth = self.depth();
        debug!(from = from.name(), to = to.name(), depth, "jump");

        let registry = self.registry;
        registry.get(from).on_terminate(self, ctx)?;
        self.still_at(depth, from)?;
        self.machine.replace_top(to);
        registry.get(to).on_enter(self, ctx)
    }

    /// Pause the active state and make `to` active on top of it.
    ///
    /// Fires `on_pause` on the current state, then `on_enter` on `to`. The
    /// capacity is checked again after `on_pause`, since that hook may have
    /// pushed states of its own.
    pub fn push(&mut self, ctx: &mut Context<D>, to: S) -> Result<(), FsmError> {
        let from = self.check(to)?;
        let capacity = self.machine.capacity();
        let depth = self.depth();
        if depth >= capacity {
            debug!(from = from.name(), to = to.name(), capacity, "rejected push on full stack");
            return Err(FsmError::StackOverflow { capacity });
        }
        debug!(from = from.name(), to = to.name(), depth = depth + 1, "push");

        let registry = self.registry;
        registry.get(from).on_pause(self, ctx)?;
        if self.depth() >= capacity {
            debug!(from = from.name(), to = to.name(), capacity, "stack filled during on_pause");
            return Err(FsmError::StackOverflow { capacity });
        }
        self.still_at(depth, from)?;
        self.machine.push_state(to);
        registry.get(to).on_enter(self, ctx)
    }

    /// Discard the active state and resume the one beneath it.
    ///
    /// Fires `on_terminate` on the popped state, then `on_resume` on the
    /// newly exposed one. Popping is not checked against the transition
    /// graph. Depth is checked again after `on_terminate`, since that hook
    /// may have popped already.
    pub fn pop(&mut self, ctx: &mut Context<D>) -> Result<(), FsmError> {
        let depth = self.depth();
        if depth < 2 {
            return Err(FsmError::StackUnderflow { depth });
        }
        let from = self.active()?;

        let registry = self.registry;
        registry.get(from).on_terminate(self, ctx)?;
        if self.depth() < 2 {
            return Err(FsmError::StackUnderflow { depth: self.depth() });
        }
        self.still_at(depth, from)?;
        self.machine.pop_state();
        let resumed = self.active()?;
        debug!(from = from.name(), to = resumed.name(), depth = self.depth(), "pop");
        registry.get(resumed).on_resume(self, ctx)
    }

    /// Tick the active state.
    ///
    /// Only the top of the stack ticks; paused states never do. If
    /// `before_update` returns `true`, `update` is skipped. Otherwise
    /// `update` runs on whatever is active after `before_update` returned.
    pub fn update(&mut self, ctx: &mut Context<D>) -> Result<(), FsmError> {
        let active = self.active()?;
        trace!(state = active.name(), seq = ctx.seq, "update");

        let registry = self.registry;
        if registry.get(active).before_update(self, ctx)? {
            return Ok(());
        }
        let active = self.active()?;
        registry.get(active).update(self, ctx)
    }

    /// Detach the record from the handler. No hooks fire.
    pub fn clear_handling(self) {
        debug!(state = ?self.top(), depth = self.depth(), "unbinding state machine");
    }
}
