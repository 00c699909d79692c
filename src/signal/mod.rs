//! Boundary to an external publish/subscribe signal bus.
//!
//! The engine does not implement a bus. Behaviors that react to signals
//! subscribe from [`Behavior::on_setup`](crate::handler::Behavior::on_setup)
//! and drain their connection from `before_update`, usually through
//! [`drain`]. Buffering and the "flip" that makes published signals visible
//! belong to the bus.
//!
//! # Example
//!
//! ```rust
//! use pushdown_fsm::signal::{drain, Connection};
//! use std::cell::RefCell;
//!
//! struct Inbox(RefCell<Vec<&'static str>>);
//!
//! impl Connection for Inbox {
//!     type Signal = &'static str;
//!
//!     fn poll(&self, on_signal: &mut dyn FnMut(Self::Signal)) {
//!         let pending: Vec<_> = self.0.borrow_mut().drain(..).collect();
//!         for signal in pending {
//!             on_signal(signal);
//!         }
//!     }
//! }
//!
//! let inbox = Inbox(RefCell::new(vec!["ping", "stop"]));
//! let abort = drain(Some(&inbox), |signal| Ok(signal == "stop")).unwrap();
//! assert!(abort);
//! ```

use crate::handler::FsmError;

/// A publish/subscribe facility behaviors can subscribe to.
pub trait SignalBus {
    type Signal;
    type Connection: Connection<Signal = Self::Signal>;

    /// Open a standing subscription to every channel matching `patterns`.
    fn subscribe(&self, patterns: &[&str]) -> Self::Connection;
}

/// A standing subscription.
pub trait Connection {
    /// Opaque signal value, compared by the subscriber.
    type Signal;

    /// Hand every buffered signal to `on_signal`, in publish order.
    fn poll(&self, on_signal: &mut dyn FnMut(Self::Signal));
}

/// Subscribe only when a behavior declares at least one pattern.
pub fn connect<B: SignalBus>(bus: &B, patterns: &[&str]) -> Option<B::Connection> {
    if patterns.is_empty() {
        None
    } else {
        Some(bus.subscribe(patterns))
    }
}

/// Drain a connection, handing each signal to `on_signal`.
///
/// Meant to be called from `before_update`: the return value is `true` if any
/// callback asked to abort the tick, and can be returned directly to skip
/// `update`. Every buffered signal is delivered even after an abort. The first
/// error returned by a callback is reported once polling has finished; later
/// signals are discarded.
pub fn drain<C, F>(connection: Option<&C>, mut on_signal: F) -> Result<bool, FsmError>
where
    C: Connection + ?Sized,
    F: FnMut(C::Signal) -> Result<bool, FsmError>,
{
    let Some(connection) = connection else {
        return Ok(false);
    };

    let mut abort = false;
    let mut failure = None;
    connection.poll(&mut |signal| {
        if failure.is_some() {
            return;
        }
        match on_signal(signal) {
            Ok(stop) => abort |= stop,
            Err(err) => failure = Some(err),
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(abort),
    }
}
