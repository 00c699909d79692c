//! The handler and its stack operations.
//!
//! A [`Handler`] owns the transition graph and one [`Behavior`] per state.
//! Binding a [`StateMachine`](crate::core::StateMachine) record to it yields a
//! [`Bound`] machine with the validated operations:
//!
//! - **Jump**: replace the active state (depth unchanged)
//! - **Push**: pause the active state under a new one (depth + 1)
//! - **Pop**: discard the active state and resume the one beneath (depth - 1)
//! - **Update**: tick the active state only
//!
//! Behaviors receive the same `Bound` in every hook, which is how they request
//! transitions from inside their own callbacks.

mod behavior;
mod bound;
mod engine;
mod error;

pub use behavior::{Behavior, BehaviorRegistry};
pub use bound::Bound;
pub use engine::Handler;
pub use error::FsmError;
