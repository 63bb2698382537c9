//! roikit-analyze - The scripting-facing analysis pipeline
//!
//! Glues the member crates into the call sequence a script performs on
//! a scanned image: threshold into a mask, decompose the mask into
//! regions, filter and order them, then measure or crop.
//!
//! # Examples
//!
//! ```
//! use roikit_analyze::{crop_to_regions, extract_regions, region_report_json};
//! use roikit_core::{PixelBuffer, PixelKind};
//! use roikit_region::{FilterBounds, SortKey};
//!
//! // A light page with one dark 2x2 blob
//! let mut page = PixelBuffer::new(10, 10, PixelKind::Grayscale8).unwrap();
//! page.fill(230);
//! for y in 3..5 {
//!     for x in 4..6 {
//!         page.set(x, y, 10).unwrap();
//!     }
//! }
//!
//! let regions = extract_regions(&page, None, &FilterBounds::default(), SortKey::ByX).unwrap();
//! assert_eq!(regions.len(), 1);
//!
//! let crops = crop_to_regions(&page, &regions).unwrap();
//! assert_eq!((crops[0].width(), crops[0].height()), (2, 2));
//!
//! let json = region_report_json(&page, &regions).unwrap();
//! assert!(json.contains("\"surface\":4"));
//! ```

pub mod error;
pub mod pipeline;
pub mod report;

// Re-export core types
pub use roikit_core;

// Re-export error types
pub use error::{AnalyzeError, AnalyzeResult};

// Re-export pipeline functions
pub use pipeline::{crop_to_regions, extract_regions};

// Re-export report functions
pub use report::{region_report, region_report_json};
