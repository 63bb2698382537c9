//! Error types for roikit-hash

use thiserror::Error;

/// Errors that can occur during hashing
#[derive(Debug, Error)]
pub enum HashError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] roikit_core::Error),
}

/// Result type for hashing operations
pub type HashResult<T> = Result<T, HashError>;
