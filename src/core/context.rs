//! Per-tick context handed to every behavior hook.

use std::time::Duration;

/// Ephemeral data for one tick or transition.
///
/// The payload `data` belongs to the caller. The handler passes it through
/// untouched; behaviors keep their per-run counters and flags in it, since a
/// behavior instance is shared by every machine the handler drives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context<D> {
    /// Tick sequence number.
    pub seq: u64,
    /// Time elapsed since the previous tick.
    pub delta: Duration,
    /// Caller-owned payload.
    pub data: D,
}

impl<D> Context<D> {
    /// Create a context at sequence zero.
    pub fn new(data: D) -> Self {
        Self {
            seq: 0,
            delta: Duration::ZERO,
            data,
        }
    }

    /// Advance to the next tick.
    pub fn tick(&mut self, delta: Duration) {
        self.seq += 1;
        self.delta = delta;
    }
}
