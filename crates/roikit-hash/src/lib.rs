//! roikit-hash - Perceptual hashing for roikit
//!
//! A 64-bit mean hash for approximate-duplicate detection: images that
//! look alike hash to nearby values, and the Hamming distance between
//! two hashes measures how far apart they look.
//!
//! # Examples
//!
//! ```
//! use roikit_core::{PixelBuffer, PixelKind};
//! use roikit_hash::{hash_distance, perceptual_hash};
//!
//! let mut flat = PixelBuffer::new(16, 16, PixelKind::Grayscale8).unwrap();
//! flat.fill(128);
//! let hash = perceptual_hash(&flat).unwrap();
//! assert_eq!(hash, 0);
//! assert_eq!(hash_distance(hash, u64::MAX), 64);
//! ```

pub mod error;
pub mod phash;

// Re-export core types
pub use roikit_core;

// Re-export error types
pub use error::{HashError, HashResult};

// Re-export hashing functions
pub use phash::{hash_distance, perceptual_hash};
