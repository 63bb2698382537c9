//! Error types for roikit-region

use roikit_core::Rect;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] roikit_core::Error),

    /// Region bounds exceed the measured buffer
    #[error("region bounds ({}, {}) {}x{} exceed {width}x{height} buffer", .bounds.x, .bounds.y, .bounds.w, .bounds.h)]
    DimensionMismatch {
        bounds: Rect,
        width: u32,
        height: u32,
    },

    /// Invalid filter configuration
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
