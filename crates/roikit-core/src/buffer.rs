//! PixelBuffer - the 2-D sample grid all analysis operations work on
//!
//! # Sample layout
//!
//! Every pixel occupies one 32-bit word, row-major from the top-left
//! corner:
//!
//! - [`PixelKind::Grayscale8`]: the low byte holds an unsigned 0..=255
//!   intensity; the upper bytes are zero.
//! - [`PixelKind::Rgb32`]: the word is packed `0xRRGGBBAA` (red in the
//!   MSB, alpha in the LSB). Freshly created buffers are fully opaque.
//!
//! # Ownership model
//!
//! A `PixelBuffer` is a plain value: analysis operations borrow it
//! read-only and produce new buffers instead of mutating in place.
//! Callers that run several pipelines in parallel give each pipeline
//! its own buffer; there is no internal locking.

use crate::color;
use crate::error::{Error, Result};
use crate::rect::Rect;

/// Pixel interpretation of a buffer's 32-bit sample words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelKind {
    /// 8-bit grayscale, one intensity per pixel
    Grayscale8,
    /// 32-bit packed RGBA color (`0xRRGGBBAA`)
    Rgb32,
}

impl std::fmt::Display for PixelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelKind::Grayscale8 => write!(f, "grayscale-8"),
            PixelKind::Rgb32 => write!(f, "rgb-32"),
        }
    }
}

/// A 2-D grid of pixel samples.
///
/// # Examples
///
/// ```
/// use roikit_core::{PixelBuffer, PixelKind};
///
/// let buf = PixelBuffer::new(640, 480, PixelKind::Grayscale8).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    kind: PixelKind,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// Grayscale buffers start black; RGB buffers start black and
    /// fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, kind: PixelKind) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let fill = match kind {
            PixelKind::Grayscale8 => 0,
            PixelKind::Rgb32 => color::compose_rgb(0, 0, 0),
        };
        Ok(Self {
            width,
            height,
            kind,
            data: vec![fill; (width as usize) * (height as usize)],
        })
    }

    /// Create a buffer from existing row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::SampleLengthMismatch`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, kind: PixelKind, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::SampleLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            kind,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel interpretation of the sample words.
    #[inline]
    pub fn kind(&self) -> PixelKind {
        self.kind
    }

    /// Raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Bounding rectangle of the whole buffer, anchored at the origin.
    pub fn extent(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.width as i32, self.height as i32)
    }

    /// Get the sample at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + x as usize])
    }

    /// Get the sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates fall outside
    /// the buffer.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[(y as usize) * (self.width as usize) + x as usize] = value;
        Ok(())
    }

    /// Get RGB values at (x, y). Only valid for RGB buffers.
    pub fn get_rgb(&self, x: u32, y: u32) -> Result<(u8, u8, u8)> {
        self.require_kind(PixelKind::Rgb32, "rgb-32")?;
        let pixel = self.get(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        Ok(color::extract_rgb(pixel))
    }

    /// Set an RGB pixel at (x, y), keeping alpha opaque.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.require_kind(PixelKind::Rgb32, "rgb-32")?;
        self.set(x, y, color::compose_rgb(r, g, b))
    }

    /// Intensity of the pixel at (x, y) as an unsigned 0..=255 value.
    ///
    /// Grayscale buffers return the stored sample; RGB buffers return
    /// the unweighted channel mean, the same reduction used by
    /// [`PixelBuffer::to_grayscale`].
    #[inline]
    pub fn intensity(&self, x: u32, y: u32) -> Option<u8> {
        let sample = self.get(x, y)?;
        Some(match self.kind {
            PixelKind::Grayscale8 => (sample & 0xff) as u8,
            PixelKind::Rgb32 => luma(sample),
        })
    }

    /// Fill the whole buffer with one sample value.
    pub fn fill(&mut self, value: u32) {
        self.data.fill(value);
    }

    /// Convert to an 8-bit grayscale buffer.
    ///
    /// RGB pixels reduce to the unweighted mean of the three channels;
    /// grayscale input is returned as a clone.
    pub fn to_grayscale(&self) -> PixelBuffer {
        match self.kind {
            PixelKind::Grayscale8 => self.clone(),
            PixelKind::Rgb32 => {
                let data = self.data.iter().map(|&p| luma(p) as u32).collect();
                PixelBuffer {
                    width: self.width,
                    height: self.height,
                    kind: PixelKind::Grayscale8,
                    data,
                }
            }
        }
    }

    /// Resize with bilinear interpolation.
    ///
    /// Sample positions map center-to-center and clamp at the borders,
    /// so repeated calls with the same target size are bit-exact across
    /// platforms. No area averaging is applied when downsizing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either target dimension
    /// is zero.
    pub fn resize_bilinear(&self, width: u32, height: u32) -> Result<PixelBuffer> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }

        let sx = self.width as f64 / width as f64;
        let sy = self.height as f64 / height as f64;
        let mut data = Vec::with_capacity((width as usize) * (height as usize));

        for y in 0..height {
            let fy = ((y as f64 + 0.5) * sy - 0.5).clamp(0.0, (self.height - 1) as f64);
            let y0 = fy.floor() as u32;
            let y1 = (y0 + 1).min(self.height - 1);
            let wy = fy - y0 as f64;
            for x in 0..width {
                let fx = ((x as f64 + 0.5) * sx - 0.5).clamp(0.0, (self.width - 1) as f64);
                let x0 = fx.floor() as u32;
                let x1 = (x0 + 1).min(self.width - 1);
                let wx = fx - x0 as f64;

                let p00 = self.get_unchecked(x0, y0);
                let p10 = self.get_unchecked(x1, y0);
                let p01 = self.get_unchecked(x0, y1);
                let p11 = self.get_unchecked(x1, y1);

                let sample = match self.kind {
                    PixelKind::Grayscale8 => {
                        lerp2(p00 & 0xff, p10 & 0xff, p01 & 0xff, p11 & 0xff, wx, wy)
                    }
                    PixelKind::Rgb32 => {
                        let mut out = 0u32;
                        for shift in [
                            color::RED_SHIFT,
                            color::GREEN_SHIFT,
                            color::BLUE_SHIFT,
                            color::ALPHA_SHIFT,
                        ] {
                            let c = lerp2(
                                (p00 >> shift) & 0xff,
                                (p10 >> shift) & 0xff,
                                (p01 >> shift) & 0xff,
                                (p11 >> shift) & 0xff,
                                wx,
                                wy,
                            );
                            out |= c << shift;
                        }
                        out
                    }
                };
                data.push(sample);
            }
        }

        Ok(PixelBuffer {
            width,
            height,
            kind: self.kind,
            data,
        })
    }

    /// Extract the sub-buffer covered by `rect`, clipped to the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the clipped rectangle is
    /// empty.
    pub fn crop(&self, rect: Rect) -> Result<PixelBuffer> {
        let clipped = rect
            .intersect(&self.extent())
            .ok_or_else(|| Error::InvalidParameter(format!("crop rectangle {rect:?} outside buffer")))?;

        let (x0, y0) = (clipped.x as u32, clipped.y as u32);
        let (w, h) = (clipped.w as u32, clipped.h as u32);
        let mut data = Vec::with_capacity((w as usize) * (h as usize));
        for y in 0..h {
            for x in 0..w {
                data.push(self.get_unchecked(x0 + x, y0 + y));
            }
        }
        Ok(PixelBuffer {
            width: w,
            height: h,
            kind: self.kind,
            data,
        })
    }

    fn require_kind(&self, kind: PixelKind, expected: &'static str) -> Result<()> {
        if self.kind != kind {
            return Err(Error::UnsupportedPixelKind {
                expected,
                actual: self.kind,
            });
        }
        Ok(())
    }
}

/// Unweighted channel mean of a packed RGB pixel.
#[inline]
fn luma(pixel: u32) -> u8 {
    let (r, g, b) = color::extract_rgb(pixel);
    ((r as u32 + g as u32 + b as u32) / 3) as u8
}

/// Bilinear interpolation of four 0..=255 channel values, rounded.
#[inline]
fn lerp2(c00: u32, c10: u32, c01: u32, c11: u32, wx: f64, wy: f64) -> u32 {
    let top = c00 as f64 + wx * (c10 as f64 - c00 as f64);
    let bottom = c01 as f64 + wx * (c11 as f64 - c01 as f64);
    (top + wy * (bottom - top) + 0.5) as u32
}
