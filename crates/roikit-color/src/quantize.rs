//! Color quantization by channel bit masking
//!
//! Both operations keep only the top `factor` bits of each channel.
//! Reduction writes the truncated channels back into a color buffer;
//! the histogram packs them into a single slot index, red in the high
//! bits.

use crate::error::{ColorError, ColorResult};
use roikit_core::{PixelBuffer, PixelKind};

/// Supported factor range for [`reduce_color`].
pub const REDUCE_FACTOR_RANGE: (u32, u32) = (1, 7);

/// Supported factor range for [`color_histogram`].
pub const HISTOGRAM_FACTOR_RANGE: (u32, u32) = (1, 5);

fn check_factor(factor: u32, (min, max): (u32, u32)) -> ColorResult<()> {
    if factor < min || factor > max {
        return Err(ColorError::InvalidFactor { factor, min, max });
    }
    Ok(())
}

/// Quantize a color buffer to `factor` significant bits per channel.
///
/// Each channel keeps its top `factor` bits and zeroes the rest, so
/// `factor = 1` maps every nonzero-high-bit channel to 0x80. The result
/// is a new buffer with every pixel fully opaque; the input is not
/// modified. Quantization is idempotent: reducing an already reduced
/// buffer with the same factor is a no-op.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFactor`] for factors outside 1..=7 and
/// a core error for non-color buffers.
pub fn reduce_color(buffer: &PixelBuffer, factor: u32) -> ColorResult<PixelBuffer> {
    check_factor(factor, REDUCE_FACTOR_RANGE)?;
    let mask = (0xFFu32 >> (8 - factor)) << (8 - factor);
    let mask = mask as u8;

    let mut out = PixelBuffer::new(buffer.width(), buffer.height(), PixelKind::Rgb32)?;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (r, g, b) = buffer.get_rgb(x, y)?;
            out.set_rgb(x, y, r & mask, g & mask, b & mask)?;
        }
    }
    Ok(out)
}

/// Histogram of a color buffer quantized to `factor` bits per channel.
///
/// Each pixel lands in slot `R << 2f | G << f | B` where R, G, B are
/// the top `factor` bits of each channel, so the result has
/// `2^(3 * factor)` slots and its total mass is the pixel count.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFactor`] for factors outside 1..=5 and
/// a core error for non-color buffers.
pub fn color_histogram(buffer: &PixelBuffer, factor: u32) -> ColorResult<Vec<u64>> {
    check_factor(factor, HISTOGRAM_FACTOR_RANGE)?;
    let shift = 8 - factor;
    let mut slots = vec![0u64; 1usize << (3 * factor)];

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (r, g, b) = buffer.get_rgb(x, y)?;
            let slot = ((r as u32 >> shift) << (2 * factor))
                | ((g as u32 >> shift) << factor)
                | (b as u32 >> shift);
            slots[slot as usize] += 1;
        }
    }
    Ok(slots)
}
