//! Selection - scoped restriction of a buffer to a region
//!
//! A `Selection` borrows the buffer and the region for its whole
//! lifetime, so the "active region" never outlives the computation it
//! was acquired for and can never leak into another pipeline
//! invocation. The buffer's pixel values are never touched.
//!
//! The selection window is the region's bounding box clipped to the
//! buffer; pixels outside the buffer are simply not part of the
//! selection. Callers that must treat an oversized region as an error
//! validate dimensions before acquiring the selection (region
//! statistics does).

use crate::region::Region;
use roikit_core::{PixelBuffer, Rect};

/// A scoped view of the buffer pixels inside a region's outline.
#[derive(Debug)]
pub struct Selection<'a> {
    buffer: &'a PixelBuffer,
    region: &'a Region,
    window: Rect,
}

impl<'a> Selection<'a> {
    /// Acquire the selection for `region` on `buffer`.
    ///
    /// The window may be empty when the region lies entirely outside
    /// the buffer; iteration then yields nothing.
    pub fn new(buffer: &'a PixelBuffer, region: &'a Region) -> Self {
        let window = region
            .bounds()
            .intersect(&buffer.extent())
            .unwrap_or_default();
        Self {
            buffer,
            region,
            window,
        }
    }

    /// The bounding window being scanned, clipped to the buffer.
    #[inline]
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Iterate the selected pixels as `(x, y, intensity)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        let w = self.window;
        (w.y..w.bottom()).flat_map(move |y| {
            (w.x..w.right()).filter_map(move |x| {
                if !self.region.contains_pixel(x, y) {
                    return None;
                }
                let v = self.buffer.intensity(x as u32, y as u32)?;
                Some((x as u32, y as u32, v))
            })
        })
    }

    /// Number of buffer pixels inside the outline.
    pub fn pixel_count(&self) -> u64 {
        self.pixels().count() as u64
    }
}
