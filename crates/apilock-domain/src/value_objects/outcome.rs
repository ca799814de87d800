//! Acquisition outcome value objects

use crate::constants::DUPLICATE_RESPONSE_STATUS;
use crate::value_objects::LockKey;

/// Outcome of a single conditional set against the store
///
/// Ephemeral: never persisted, only valid inside the execution that
/// attempted the acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    /// This execution created the lock record
    Acquired,
    /// The lock record already existed
    Duplicate,
}

impl AcquisitionOutcome {
    /// Whether this execution owns the lock
    pub fn is_acquired(self) -> bool {
        matches!(self, Self::Acquired)
    }
}

/// Busy signal handed to the collaborator for a duplicate request
///
/// The collaborator reports `status` on its response and surfaces
/// `message` on its error channel. Guarded logic must not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRejection {
    /// Response status to report
    pub status: u16,
    /// Configured busy message
    pub message: String,
    /// Key of the lock that is already held
    pub key: LockKey,
}

impl DuplicateRejection {
    /// Rejection for `key` carrying `message`
    pub fn new<S: Into<String>>(key: LockKey, message: S) -> Self {
        Self {
            status: DUPLICATE_RESPONSE_STATUS,
            message: message.into(),
            key,
        }
    }
}
