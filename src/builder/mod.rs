//! Builder API for handler construction.
//!
//! This module provides a fluent builder and macros for declaring states,
//! transition tables and behavior tables with minimal boilerplate.

pub mod error;
pub mod handler;
pub mod macros;

pub use error::{BuildError, SetupViolation};
pub use handler::HandlerBuilder;
