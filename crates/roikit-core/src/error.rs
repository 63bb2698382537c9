//! Error types for roikit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::buffer::PixelKind;
use thiserror::Error;

/// roikit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Buffer dimension mismatch between two collaborating buffers
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Operation requires a different pixel kind
    #[error("unsupported pixel kind: expected {expected}, got {actual}")]
    UnsupportedPixelKind {
        expected: &'static str,
        actual: PixelKind,
    },

    /// Sample vector length does not match width*height
    #[error("sample length mismatch: expected {expected}, got {actual}")]
    SampleLengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for roikit-core operations
pub type Result<T> = std::result::Result<T, Error>;
