//! Automatic thresholding and mask derivation
//!
//! The threshold selector is the iterative intermeans (isodata)
//! procedure: split the histogram at a candidate level, average the
//! means of the two halves, and walk the candidate up until it passes
//! the averaged result.

use crate::error::ColorResult;
use roikit_core::{PixelBuffer, PixelKind};

/// Foreground pixel value in derived masks.
pub const MASK_ON: u32 = 255;

/// Compute the isodata threshold of a buffer's intensity histogram.
///
/// Color buffers are measured through their channel-mean intensity.
/// A flat histogram (every pixel at one level) yields the midpoint 128.
pub fn auto_threshold(buffer: &PixelBuffer) -> u8 {
    let mut histogram = [0u64; 256];
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if let Some(v) = buffer.intensity(x, y) {
                histogram[v as usize] += 1;
            }
        }
    }
    isodata_threshold(&histogram)
}

/// Isodata threshold of a 256-bin histogram.
pub fn isodata_threshold(histogram: &[u64; 256]) -> u8 {
    let mut min = 0usize;
    while histogram[min] == 0 && min < 255 {
        min += 1;
    }
    let mut max = 255usize;
    while histogram[max] == 0 && max > 0 {
        max -= 1;
    }
    if min >= max {
        return 128;
    }

    let mut moving = min;
    let mut result;
    loop {
        let (mut sum1, mut count1) = (0.0f64, 0.0f64);
        for (i, &n) in histogram.iter().enumerate().take(moving + 1).skip(min) {
            sum1 += (i as f64) * n as f64;
            count1 += n as f64;
        }
        let (mut sum2, mut count2) = (0.0f64, 0.0f64);
        for (i, &n) in histogram.iter().enumerate().take(max + 1).skip(moving + 1) {
            sum2 += (i as f64) * n as f64;
            count2 += n as f64;
        }
        result = (sum1 / count1 + sum2 / count2) / 2.0;
        moving += 1;
        if (moving + 1) as f64 > result || moving >= max - 1 {
            break;
        }
    }
    result.round() as u8
}

/// Derive a binary mask from a buffer by automatic thresholding.
///
/// With `dark_background` the bright pixels become foreground;
/// otherwise the dark ones do, matching scans of dark objects on a
/// light page. Foreground is [`MASK_ON`], background 0; the mask is
/// always `Grayscale8` with the source's dimensions.
pub fn make_mask(buffer: &PixelBuffer, dark_background: bool) -> ColorResult<PixelBuffer> {
    let threshold = auto_threshold(buffer);
    let mut mask = PixelBuffer::new(buffer.width(), buffer.height(), PixelKind::Grayscale8)?;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let Some(v) = buffer.intensity(x, y) else {
                continue;
            };
            let fg = if dark_background {
                v > threshold
            } else {
                v <= threshold
            };
            if fg {
                mask.set(x, y, MASK_ON)?;
            }
        }
    }
    Ok(mask)
}
