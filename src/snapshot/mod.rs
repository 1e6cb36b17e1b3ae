//! Configuration snapshots for persistence.
//!
//! A snapshot captures the externally visible configuration of a machine:
//! its name and the active state's name. It deliberately excludes the
//! state/transition graph and all actions (not serializable); restoring a
//! snapshot assumes the same machine has been reassembled, and goes
//! through the hook-free restore path so persisted side effects are not
//! replayed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::machine::{MachineError, StateMachine};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable record of a machine's active-state configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Name of the machine the snapshot was taken from
    pub machine: String,

    /// Name of the active state at capture time
    pub active_state: String,
}

impl Snapshot {
    /// Capture a configuration for the named machine.
    pub fn new(machine: impl Into<String>, active_state: impl Into<String>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            machine: machine.into(),
            active_state: active_state.into(),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to a compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    fn validate_for(&self, machine: &str) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if self.machine != machine {
            return Err(SnapshotError::MachineMismatch {
                expected: machine.to_string(),
                found: self.machine.clone(),
            });
        }
        Ok(())
    }
}

impl StateMachine {
    /// Capture the current configuration. Requires an active state.
    pub fn snapshot(&self) -> Result<Snapshot, MachineError> {
        let active_state = self.configuration()?.to_string();
        Ok(Snapshot::new(self.name().to_string(), active_state))
    }

    /// Restore a previously captured configuration.
    ///
    /// Validates the snapshot version and machine name, then sets the
    /// active state through the hook-free restore path: no entry or exit
    /// action fires. A failed restore leaves the active state unchanged.
    pub fn restore_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        snapshot.validate_for(self.name())?;
        self.restore_configuration(&snapshot.active_state)?;
        Ok(())
    }
}
