//! Error types for roikit-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] roikit_core::Error),

    /// Quantization factor outside the operation's supported range
    #[error("invalid factor {factor}: expected {min}..={max}")]
    InvalidFactor { factor: u32, min: u32, max: u32 },

    /// Buffers fed to a compositing operation disagree in size
    #[error("dimension mismatch: {}x{} vs {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
