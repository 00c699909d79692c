//! Core pushdown state machine types.
//!
//! This module contains the plain data the engine works on:
//! - State definitions via the `State` trait
//! - Transition tables and the adjacency graph built from them
//! - The per-tick `Context`
//! - The `StateMachine` record (a bounded stack of states)
//!
//! Nothing here dispatches behavior; that is the handler's job.

mod context;
mod graph;
mod machine;
mod state;

pub use context::Context;
pub use graph::{Transition, TransitionGraph, TransitionTable};
pub use machine::StateMachine;
pub use state::State;
