//! Error types for roikit-analyze

use thiserror::Error;

/// Errors that can occur in the analysis pipeline
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] roikit_core::Error),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] roikit_region::RegionError),

    /// Color processing error
    #[error("color error: {0}")]
    Color(#[from] roikit_color::ColorError),

    /// Report serialization error
    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Mask decomposition produced no regions at all
    #[error("mask decomposes to no regions")]
    EmptyRegionSet,
}

/// Result type for pipeline operations
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
