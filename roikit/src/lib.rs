//! Roikit - Region-of-interest analysis for raster images
//!
//! # Overview
//!
//! Roikit turns raster images into measurable regions:
//!
//! - Pixel buffers (grayscale and color), cropping, bilinear resampling
//! - Automatic thresholding and binary mask derivation
//! - Mask decomposition into closed-outline regions
//! - Region filtering, ordering, and per-region statistics
//! - Color quantization and packed color histograms
//! - Alpha compositing from a transparency buffer
//! - 64-bit perceptual hashing for approximate-duplicate detection
//!
//! # Example
//!
//! ```
//! use roikit::{PixelBuffer, PixelKind};
//! use roikit::analyze::extract_regions;
//! use roikit::region::{FilterBounds, SortKey};
//!
//! // A light page with one dark 3x3 blob
//! let mut page = PixelBuffer::new(12, 12, PixelKind::Grayscale8).unwrap();
//! page.fill(230);
//! for y in 4..7 {
//!     for x in 5..8 {
//!         page.set(x, y, 12).unwrap();
//!     }
//! }
//!
//! let regions = extract_regions(&page, None, &FilterBounds::default(), SortKey::ByX).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].bounds().w, 3);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use roikit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use roikit_analyze as analyze;
pub use roikit_color as color;
pub use roikit_hash as hash;
pub use roikit_region as region;
