//! roikit-color - Thresholding, quantization, and compositing for roikit
//!
//! This crate covers the color-side operations of the toolkit:
//!
//! - **Automatic thresholding** - Isodata threshold selection and binary
//!   mask derivation
//! - **Color quantization** - Channel bit-mask reduction and packed
//!   color histograms
//! - **Alpha compositing** - Punching transparency into a color buffer
//!   from a companion transparency buffer
//!
//! # Examples
//!
//! ## Deriving a mask
//!
//! ```
//! use roikit_color::make_mask;
//! use roikit_core::{PixelBuffer, PixelKind};
//!
//! // Dark object on a light background
//! let mut scan = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
//! scan.fill(230);
//! scan.set(3, 3, 15).unwrap();
//!
//! let mask = make_mask(&scan, false).unwrap();
//! assert_eq!(mask.intensity(3, 3), Some(255));
//! assert_eq!(mask.intensity(0, 0), Some(0));
//! ```
//!
//! ## Quantizing colors
//!
//! ```
//! use roikit_color::{color_histogram, reduce_color};
//! use roikit_core::{PixelBuffer, PixelKind};
//!
//! let mut image = PixelBuffer::new(2, 1, PixelKind::Rgb32).unwrap();
//! image.set_rgb(0, 0, 255, 0, 0).unwrap();
//! image.set_rgb(1, 0, 0, 0, 255).unwrap();
//!
//! let reduced = reduce_color(&image, 1).unwrap();
//! assert_eq!(reduced.get_rgb(0, 0).unwrap(), (0x80, 0, 0));
//!
//! let hist = color_histogram(&image, 1).unwrap();
//! assert_eq!(hist.len(), 8);
//! assert_eq!(hist[0b100] + hist[0b001], 2);
//! ```

pub mod alpha;
pub mod error;
pub mod quantize;
pub mod threshold;

// Re-export core types
pub use roikit_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export threshold types and functions
pub use threshold::{MASK_ON, auto_threshold, isodata_threshold, make_mask};

// Re-export quantize types and functions
pub use quantize::{
    HISTOGRAM_FACTOR_RANGE, REDUCE_FACTOR_RANGE, color_histogram, reduce_color,
};

// Re-export alpha functions
pub use alpha::composite_alpha;
