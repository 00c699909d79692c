//! Checkpoint and restore for state machine records.
//!
//! A record is plain data, so a host can persist it between runs and bind it
//! again later; rebinding a started record fires no hooks and resumes exactly
//! where it stopped. Behaviors and the transition graph are not part of a
//! checkpoint; they come from the handler the record is bound to.

use crate::core::{State, StateMachine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a state machine record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The captured record
    pub machine: StateMachine<S>,
}

impl<S: State> Checkpoint<S> {
    /// Capture the current stack of a record.
    pub fn capture(machine: &StateMachine<S>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            machine: machine.clone(),
        }
    }

    /// Check the version, the stack bounds and that every state is
    /// declared, then hand back the record.
    pub fn restore(self) -> Result<StateMachine<S>, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let depth = self.machine.depth();
        let capacity = self.machine.capacity();
        if depth > capacity {
            return Err(CheckpointError::StackTooDeep { depth, capacity });
        }
        if let Some(stray) = self.machine.stack().iter().find(|s| s.index() >= capacity) {
            return Err(CheckpointError::UnknownState {
                state: stray.name().to_string(),
                index: stray.index(),
            });
        }

        Ok(self.machine)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}
