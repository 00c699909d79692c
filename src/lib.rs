//! pushdown-fsm: a pushdown finite state machine engine
//!
//! Hosts (game entities, robots, agents) attach reusable behavior to a small,
//! closed set of states. Instead of a single current state, each machine keeps
//! a bounded stack of states: the top one is active, the ones beneath it are
//! paused and resume when the top is popped.
//!
//! # Core Concepts
//!
//! - **State**: a closed enumeration indexed `0..N`, declared with [`state_enum!`]
//! - **Transition graph**: directed adjacency checked before every jump and push
//! - **Behavior**: one stateless object per state receiving lifecycle hooks
//! - **StateMachine**: the plain-data stack record a host owns
//! - **Handler**: validates transitions and dispatches hooks for a bound record
//!
//! # Example
//!
//! ```rust
//! use pushdown_fsm::core::{Context, StateMachine};
//! use pushdown_fsm::handler::{Behavior, Bound, FsmError, Handler};
//! use pushdown_fsm::{state_enum, transitions};
//!
//! state_enum! {
//!     enum Robot {
//!         Idle,
//!         Moving,
//!         Dancing,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Stats {
//!     dance_moves: u32,
//! }
//!
//! struct Idle;
//! impl Behavior<Robot, Stats> for Idle {
//!     fn state(&self) -> Robot { Robot::Idle }
//! }
//!
//! struct Moving;
//! impl Behavior<Robot, Stats> for Moving {
//!     fn state(&self) -> Robot { Robot::Moving }
//! }
//!
//! struct Dancing;
//! impl Behavior<Robot, Stats> for Dancing {
//!     fn state(&self) -> Robot { Robot::Dancing }
//!
//!     fn update(&self, _fsm: &mut Bound<'_, '_, Robot, Stats>, ctx: &mut Context<Stats>) -> Result<(), FsmError> {
//!         ctx.data.dance_moves += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut handler: Handler<Robot, Stats> = Handler::new(
//!     vec![Box::new(Idle), Box::new(Moving), Box::new(Dancing)],
//!     transitions![
//!         Robot::Idle => [Robot::Moving, Robot::Dancing],
//!         Robot::Moving => [Robot::Idle, Robot::Dancing],
//!         Robot::Dancing => [Robot::Idle],
//!     ],
//! )
//! .unwrap();
//!
//! let mut machine = StateMachine::new();
//! let mut ctx = Context::new(Stats::default());
//!
//! let mut fsm = handler.set_handling(&mut machine, &mut ctx).unwrap();
//! fsm.jump(&mut ctx, Robot::Moving).unwrap();
//! fsm.push(&mut ctx, Robot::Dancing).unwrap();
//! fsm.update(&mut ctx).unwrap();
//! fsm.pop(&mut ctx).unwrap();
//! fsm.clear_handling();
//!
//! assert_eq!(machine.stack(), &[Robot::Moving]);
//! assert_eq!(ctx.data.dance_moves, 1);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod handler;
pub mod signal;

// Re-export commonly used types
pub use crate::builder::{BuildError, HandlerBuilder};
pub use crate::core::{Context, State, StateMachine, TransitionTable};
pub use crate::handler::{Behavior, Bound, FsmError, Handler};
