//! 64-bit mean perceptual hash
//!
//! The hash summarizes an image's coarse luminance layout: grayscale,
//! shrink to 8x8 by bilinear sampling, then one bit per cell marking
//! whether it is darker than the mean. Two images that differ only in
//! scale, compression noise, or small color shifts land on nearby
//! hashes; [`hash_distance`] counts the differing bits.

use crate::error::HashResult;
use roikit_core::PixelBuffer;

/// Side length of the downsampled grid; the hash carries one bit per
/// cell.
const GRID: u32 = 8;

/// Compute the 64-bit perceptual hash of a buffer.
///
/// Bits are packed most significant first in row-major grid order, and
/// a cell's bit is set when its sample is strictly below the grid mean.
/// A flat image therefore hashes to 0.
pub fn perceptual_hash(buffer: &PixelBuffer) -> HashResult<u64> {
    let gray = buffer.to_grayscale();
    let small = gray.resize_bilinear(GRID, GRID)?;

    let mut samples = [0u8; (GRID * GRID) as usize];
    let mut total = 0u32;
    for y in 0..GRID {
        for x in 0..GRID {
            // Unwrap is fine: (x, y) is inside the 8x8 buffer.
            let v = small.intensity(x, y).unwrap_or(0);
            samples[(y * GRID + x) as usize] = v;
            total += v as u32;
        }
    }
    let mean = total as f64 / (GRID * GRID) as f64;

    let mut hash = 0u64;
    for &sample in &samples {
        hash = (hash << 1) | u64::from((sample as f64) < mean);
    }
    Ok(hash)
}

/// Hamming distance between two hashes, 0..=64.
#[inline]
pub fn hash_distance(a: u64, b: u64) -> u8 {
    (a ^ b).count_ones() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use roikit_core::PixelKind;

    #[test]
    fn flat_image_hashes_to_zero() {
        let mut buffer = PixelBuffer::new(32, 32, PixelKind::Grayscale8).unwrap();
        buffer.fill(128);
        assert_eq!(perceptual_hash(&buffer).unwrap(), 0);
    }

    #[test]
    fn half_dark_image_sets_the_dark_half() {
        let mut buffer = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                buffer.set(x, y, if x < 4 { 0 } else { 200 }).unwrap();
            }
        }
        let hash = perceptual_hash(&buffer).unwrap();
        // Left half dark: each row contributes 0b11110000.
        assert_eq!(hash, u64::from_le_bytes([0xF0; 8]));
    }

    #[test]
    fn identical_images_have_distance_zero() {
        let mut buffer = PixelBuffer::new(16, 16, PixelKind::Grayscale8).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                buffer.set(x, y, ((x * 16 + y * 3) % 256) as u32).unwrap();
            }
        }
        let a = perceptual_hash(&buffer).unwrap();
        let b = perceptual_hash(&buffer).unwrap();
        assert_eq!(hash_distance(a, b), 0);
    }

    #[test]
    fn inverted_image_is_maximally_distant() {
        let mut buffer = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
        let mut inverted = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let v = if (x + y) % 2 == 0 { 10 } else { 250 };
                buffer.set(x, y, v).unwrap();
                inverted.set(x, y, 255 - v).unwrap();
            }
        }
        let a = perceptual_hash(&buffer).unwrap();
        let b = perceptual_hash(&inverted).unwrap();
        assert_eq!(hash_distance(a, b), 64);
    }

    #[test]
    fn distance_is_symmetric_and_bounded() {
        assert_eq!(hash_distance(0, u64::MAX), 64);
        assert_eq!(hash_distance(u64::MAX, 0), 64);
        assert_eq!(hash_distance(0b1010, 0b0101), 4);
        assert_eq!(hash_distance(42, 42), 0);
    }

    #[test]
    fn hash_is_scale_invariant_for_block_patterns() {
        // Same half-dark layout at two sizes.
        let mut small = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
        let mut large = PixelBuffer::new(64, 64, PixelKind::Grayscale8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                small.set(x, y, if x < 4 { 0 } else { 200 }).unwrap();
            }
        }
        for y in 0..64 {
            for x in 0..64 {
                large.set(x, y, if x < 32 { 0 } else { 200 }).unwrap();
            }
        }
        let a = perceptual_hash(&small).unwrap();
        let b = perceptual_hash(&large).unwrap();
        // The boundary column may blur differently; the bulk agrees.
        assert!(hash_distance(a, b) <= 8);
    }

    #[test]
    fn color_buffers_hash_through_their_luminance() {
        let mut buffer = PixelBuffer::new(8, 8, PixelKind::Rgb32).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 0 } else { 200 };
                buffer.set_rgb(x, y, v, v, v).unwrap();
            }
        }
        let mut gray = PixelBuffer::new(8, 8, PixelKind::Grayscale8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                gray.set(x, y, if x < 4 { 0 } else { 200 }).unwrap();
            }
        }
        let a = perceptual_hash(&buffer).unwrap();
        let b = perceptual_hash(&gray).unwrap();
        assert_eq!(hash_distance(a, b), 0);
    }
}
