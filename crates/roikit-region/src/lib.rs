//! roikit-region - Region extraction and measurement for roikit
//!
//! This crate turns binary masks into regions and measures them:
//!
//! - **Mask decomposition** - Tracing closed outlines out of a binary mask
//! - **Selections** - Scoped restriction of a buffer to one region
//! - **Filtering** - Keeping regions inside geometric and surface bounds
//! - **Ordering** - Stable sorts by position, length, or surface
//! - **Statistics** - Per-region histograms, centroids, and centers of mass
//!
//! # Examples
//!
//! ## Extracting and filtering regions
//!
//! ```
//! use roikit_region::{FilterBounds, extract_regions_from_mask, filter_regions};
//! use roikit_core::{PixelBuffer, PixelKind};
//!
//! // A mask with one 2x2 blob
//! let mut mask = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
//! for y in 2..4 {
//!     for x in 3..5 {
//!         mask.set(x, y, 255).unwrap();
//!     }
//! }
//!
//! let regions = extract_regions_from_mask(&mask).unwrap();
//! assert_eq!(regions.len(), 1);
//!
//! let bounds = FilterBounds { min_width: 2.0, ..Default::default() };
//! let kept = filter_regions(&regions, &mask, &bounds).unwrap();
//! assert_eq!(kept.len(), 1);
//! ```
//!
//! ## Measuring a region
//!
//! ```
//! use roikit_region::{extract_regions_from_mask, region_statistics};
//! use roikit_core::{PixelBuffer, PixelKind};
//!
//! let mut mask = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
//! mask.set(4, 5, 255).unwrap();
//!
//! let regions = extract_regions_from_mask(&mask).unwrap();
//! let stats = region_statistics(&mask, &regions[0]).unwrap();
//! assert_eq!(stats.pixel_count, 1);
//! assert_eq!(stats.x_centroid, 4.5);
//! ```

pub mod error;
pub mod extract;
pub mod filter;
pub mod region;
pub mod selection;
pub mod sort;
pub mod stats;
pub mod trace;

// Re-export core types
pub use roikit_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export region types and functions
pub use extract::extract_regions_from_mask;
pub use filter::{FilterBounds, filter_regions};
pub use region::Region;
pub use selection::Selection;
pub use sort::{SortKey, sort_regions};
pub use stats::{RegionStats, region_statistics};
pub use trace::trace_outlines;
