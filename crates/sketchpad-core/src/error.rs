//! Error types for the core crate.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] sketchpad_storage::StorageError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
