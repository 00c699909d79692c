//! Per-state behaviors and the registry that indexes them.

use super::bound::Bound;
use super::error::FsmError;
use crate::builder::{BuildError, SetupViolation};
use crate::core::{Context, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Lifecycle hooks for exactly one state.
///
/// A handler owns one behavior per state and shares it across every machine
/// it ever drives, so hooks take `&self`. Anything that varies per machine
/// (counters, flags, timers) belongs in the context payload `ctx.data`.
///
/// Every hook receives the bound machine as `fsm`, which is how a behavior
/// requests transitions from inside its own hooks. Such calls re-enter the
/// handler, so a hook must not assume it is the only frame on the stack.
///
/// All hooks default to doing nothing.
///
/// # Example
///
/// ```rust
/// use pushdown_fsm::core::Context;
/// use pushdown_fsm::handler::{Behavior, Bound, FsmError};
/// use pushdown_fsm::state_enum;
///
/// state_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// struct OffBehavior;
///
/// impl Behavior<Light, u32> for OffBehavior {
///     fn state(&self) -> Light {
///         Light::Off
///     }
///
///     fn update(&self, fsm: &mut Bound<'_, '_, Light, u32>, ctx: &mut Context<u32>) -> Result<(), FsmError> {
///         ctx.data += 1;
///         if ctx.data >= 3 {
///             fsm.jump(ctx, Light::On)?;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Behavior<S: State, D> {
    /// The state this behavior implements.
    fn state(&self) -> S;

    /// Called once while the handler is built, before any machine is bound.
    fn on_setup(&mut self) {}

    /// This state became the active one, by jump or push.
    fn on_enter(&self, _fsm: &mut Bound<'_, '_, S, D>, _ctx: &mut Context<D>) -> Result<(), FsmError> {
        Ok(())
    }

    /// This state stopped being active and was discarded, by jump or pop.
    fn on_terminate(
        &self,
        _fsm: &mut Bound<'_, '_, S, D>,
        _ctx: &mut Context<D>,
    ) -> Result<(), FsmError> {
        Ok(())
    }

    /// Another state was pushed on top of this one.
    fn on_pause(&self, _fsm: &mut Bound<'_, '_, S, D>, _ctx: &mut Context<D>) -> Result<(), FsmError> {
        Ok(())
    }

    /// The state above this one was popped.
    fn on_resume(&self, _fsm: &mut Bound<'_, '_, S, D>, _ctx: &mut Context<D>) -> Result<(), FsmError> {
        Ok(())
    }

    /// Runs before `update` on every tick. Returning `true` skips `update`
    /// for this tick.
    fn before_update(
        &self,
        _fsm: &mut Bound<'_, '_, S, D>,
        _ctx: &mut Context<D>,
    ) -> Result<bool, FsmError> {
        Ok(false)
    }

    /// Per-tick logic of the active state.
    fn update(&self, _fsm: &mut Bound<'_, '_, S, D>, _ctx: &mut Context<D>) -> Result<(), FsmError> {
        Ok(())
    }
}

/// One behavior per state, addressed by state index.
pub struct BehaviorRegistry<S: State, D> {
    behaviors: Vec<Box<dyn Behavior<S, D>>>,
}

impl<S: State, D> BehaviorRegistry<S, D> {
    /// Slot every behavior at its state's index and run `on_setup` on each.
    ///
    /// Fails if a state is claimed twice or has no behavior, if a behavior
    /// claims a state whose index is outside `0..N`, or if the `State`
    /// implementation lists its variants out of index order. All problems
    /// are reported together.
    pub(crate) fn from_behaviors(behaviors: Vec<Box<dyn Behavior<S, D>>>) -> Result<Self, BuildError> {
        let n = S::count();
        let mut checks: Vec<Validation<(), NonEmptyVec<SetupViolation>>> = Vec::new();

        for (expected, state) in S::ALL.iter().enumerate() {
            let reported = state.index();
            if reported != expected {
                checks.push(Validation::fail(SetupViolation::IndexMismatch {
                    state: state.name().to_string(),
                    reported,
                    expected,
                }));
            }
        }

        let mut slots: Vec<Option<Box<dyn Behavior<S, D>>>> = (0..n).map(|_| None).collect();
        for behavior in behaviors {
            let state = behavior.state();
            let Some(slot) = slots.get_mut(state.index()) else {
                checks.push(Validation::fail(SetupViolation::out_of_range(state)));
                continue;
            };
            if slot.is_some() {
                checks.push(Validation::fail(SetupViolation::DuplicateBehavior {
                    state: state.name().to_string(),
                }));
            } else {
                *slot = Some(behavior);
            }
        }

        for (index, slot) in slots.iter().enumerate() {
            if slot.is_none() {
                let name = S::from_index(index).map_or_else(|| index.to_string(), |s| s.name().to_string());
                checks.push(Validation::fail(SetupViolation::MissingBehavior { state: name }));
            }
        }

        if let Validation::Failure(errors) = Validation::all_vec(checks).map(|_| ()) {
            return Err(BuildError::InvalidSetup {
                violations: errors.iter().cloned().collect(),
            });
        }

        let mut behaviors: Vec<Box<dyn Behavior<S, D>>> = slots.into_iter().flatten().collect();
        for behavior in &mut behaviors {
            behavior.on_setup();
        }

        Ok(Self { behaviors })
    }

    /// The behavior for `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` indexes outside `0..N`. Bound machines only ever
    /// hold states that passed the graph or the bind check.
    pub fn get(&self, state: S) -> &dyn Behavior<S, D> {
        self.behaviors[state.index()].as_ref()
    }

    /// The behavior for `state`, or `None` if its index is outside `0..N`.
    pub fn try_get(&self, state: S) -> Option<&dyn Behavior<S, D>> {
        self.behaviors.get(state.index()).map(|b| b.as_ref())
    }

    /// Number of registered behaviors.
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;
    use std::cell::Cell;
    use std::rc::Rc;

    state_enum! {
        enum TestState {
            A,
            B,
            C,
        }
    }

    struct Recorder {
        state: TestState,
        setups: Rc<Cell<usize>>,
    }

    impl Behavior<TestState, ()> for Recorder {
        fn state(&self) -> TestState {
            self.state
        }

        fn on_setup(&mut self) {
            self.setups.set(self.setups.get() + 1);
        }
    }

    fn recorder(state: TestState, setups: &Rc<Cell<usize>>) -> Box<dyn Behavior<TestState, ()>> {
        Box::new(Recorder {
            state,
            setups: Rc::clone(setups),
        })
    }

    #[test]
    fn behaviors_are_indexed_by_state() {
        let setups = Rc::new(Cell::new(0));
        let registry = BehaviorRegistry::from_behaviors(vec![
            recorder(TestState::C, &setups),
            recorder(TestState::A, &setups),
            recorder(TestState::B, &setups),
        ])
        .unwrap();

        assert_eq!(registry.len(), 3);
        for state in TestState::ALL {
            assert_eq!(registry.get(*state).state(), *state);
        }
    }

    #[test]
    fn on_setup_runs_once_per_behavior() {
        let setups = Rc::new(Cell::new(0));
        BehaviorRegistry::from_behaviors(vec![
            recorder(TestState::A, &setups),
            recorder(TestState::B, &setups),
            recorder(TestState::C, &setups),
        ])
        .unwrap();

        assert_eq!(setups.get(), 3);
    }

    #[test]
    fn setup_collects_every_violation() {
        let setups = Rc::new(Cell::new(0));
        let result = BehaviorRegistry::from_behaviors(vec![
            recorder(TestState::A, &setups),
            recorder(TestState::A, &setups),
        ]);

        match result {
            Err(BuildError::InvalidSetup { violations }) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.contains(&SetupViolation::DuplicateBehavior {
                    state: "A".to_string()
                }));
                assert!(violations.contains(&SetupViolation::MissingBehavior {
                    state: "B".to_string()
                }));
                assert!(violations.contains(&SetupViolation::MissingBehavior {
                    state: "C".to_string()
                }));
            }
            _ => panic!("Expected InvalidSetup"),
        }
        assert_eq!(setups.get(), 0, "on_setup must not run when setup fails");
    }
}
