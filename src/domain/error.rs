//! Error types surfaced by the list store.
//!
//! Blank labels and unknown ids are not errors; they are silent no-ops.

use thiserror::Error;

/// Failures of a single list store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database could not be opened or its schema created.
    #[error("Storage unavailable")]
    StorageUnavailable(#[source] anyhow::Error),

    /// An operation was attempted before `initialize()` succeeded.
    #[error("List store is not initialized")]
    NotInitialized,

    #[error("Failed to read entries")]
    StorageRead(#[source] anyhow::Error),

    #[error("Failed to write entry")]
    StorageWrite(#[source] anyhow::Error),

    /// The blocking worker running the operation panicked or was cancelled.
    #[error("List store task was interrupted")]
    Interrupted(#[from] tokio::task::JoinError),
}

impl StoreError {
    /// Whether re-triggering the same action may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::StorageRead(_) | StoreError::StorageWrite(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
