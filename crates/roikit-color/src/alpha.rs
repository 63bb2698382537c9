//! Alpha compositing from a transparency buffer

use crate::error::{ColorError, ColorResult};
use crate::threshold::auto_threshold;
use roikit_core::{PixelBuffer, PixelKind, color};

/// Punch transparency into a color buffer from a companion buffer.
///
/// The transparency buffer is auto-thresholded; pixels whose intensity
/// falls below the threshold become fully transparent (alpha 0) and the
/// rest fully opaque (alpha 255). Color channels are carried over
/// untouched. Typical use: the transparency buffer is a scan of the
/// same page where the paper reads bright and the ink dark, so the ink
/// keeps its color and the paper drops out.
///
/// # Errors
///
/// Returns [`ColorError::DimensionMismatch`] when the two buffers
/// disagree in size and a core error when `buffer` is not a color
/// buffer.
pub fn composite_alpha(
    buffer: &PixelBuffer,
    transparency: &PixelBuffer,
) -> ColorResult<PixelBuffer> {
    if buffer.extent() != transparency.extent() {
        return Err(ColorError::DimensionMismatch {
            expected: (buffer.width(), buffer.height()),
            actual: (transparency.width(), transparency.height()),
        });
    }

    let threshold = auto_threshold(transparency);
    let mut out = PixelBuffer::new(buffer.width(), buffer.height(), PixelKind::Rgb32)?;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let (r, g, b) = buffer.get_rgb(x, y)?;
            let opaque = transparency
                .intensity(x, y)
                .is_some_and(|v| v >= threshold);
            let a = if opaque { 255 } else { 0 };
            out.set(x, y, color::compose_rgba(r, g, b, a))?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_follows_thresholded_transparency() {
        let mut buffer = PixelBuffer::new(2, 1, PixelKind::Rgb32).unwrap();
        buffer.set_rgb(0, 0, 10, 20, 30).unwrap();
        buffer.set_rgb(1, 0, 40, 50, 60).unwrap();

        let mut transparency = PixelBuffer::new(2, 1, PixelKind::Grayscale8).unwrap();
        transparency.set(0, 0, 20).unwrap();
        transparency.set(1, 0, 240).unwrap();

        let out = composite_alpha(&buffer, &transparency).unwrap();
        let (r, g, b, a) = color::extract_rgba(out.get(0, 0).unwrap());
        assert_eq!((r, g, b, a), (10, 20, 30, 0));
        let (r, g, b, a) = color::extract_rgba(out.get(1, 0).unwrap());
        assert_eq!((r, g, b, a), (40, 50, 60, 255));
    }

    #[test]
    fn uniform_transparency_is_fully_opaque() {
        // Threshold of a one-level histogram is 128; a uniform 200
        // transparency keeps everything.
        let buffer = PixelBuffer::new(3, 3, PixelKind::Rgb32).unwrap();
        let mut transparency = PixelBuffer::new(3, 3, PixelKind::Grayscale8).unwrap();
        transparency.fill(200);

        let out = composite_alpha(&buffer, &transparency).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(color::alpha(out.get(x, y).unwrap()), 255);
            }
        }
    }

    #[test]
    fn uniform_dark_transparency_is_fully_transparent() {
        let buffer = PixelBuffer::new(2, 2, PixelKind::Rgb32).unwrap();
        let transparency = PixelBuffer::new(2, 2, PixelKind::Grayscale8).unwrap();

        let out = composite_alpha(&buffer, &transparency).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(color::alpha(out.get(x, y).unwrap()), 0);
            }
        }
    }

    #[test]
    fn mismatched_sizes_rejected() {
        let buffer = PixelBuffer::new(4, 4, PixelKind::Rgb32).unwrap();
        let transparency = PixelBuffer::new(4, 5, PixelKind::Grayscale8).unwrap();
        assert!(matches!(
            composite_alpha(&buffer, &transparency),
            Err(ColorError::DimensionMismatch { .. })
        ));
    }
}
