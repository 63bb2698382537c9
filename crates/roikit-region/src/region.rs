//! Region - a closed planar outline carved out of a mask
//!
//! Regions are derived by mask decomposition, never constructed from
//! scratch by callers. A multiply-connected mask (a ring, say) yields
//! one sibling region per closed outline: the outer boundary and each
//! hole boundary become separate regions, not one polygon with holes.
//!
//! Regions have value semantics: they are immutable once produced and
//! carry no identity, so callers that need stable handles across two
//! extraction calls simply retain the values.

use roikit_core::{Polygon, Rect};

/// A closed outline with its derived bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    outline: Polygon,
    bounds: Rect,
}

impl Region {
    /// Build a region from a traced outline.
    pub fn from_outline(outline: Polygon) -> Self {
        let bounds = outline.bounds();
        Self { outline, bounds }
    }

    /// The closed outline.
    #[inline]
    pub fn outline(&self) -> &Polygon {
        &self.outline
    }

    /// Axis-aligned bounding box of the outline.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Outline length.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.outline.perimeter()
    }

    /// Whether the pixel at (x, y) lies inside the outline.
    ///
    /// Membership is decided at the pixel center.
    #[inline]
    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        self.bounds.contains_point(x, y) && self.outline.contains(x as f64 + 0.5, y as f64 + 0.5)
    }

    /// Number of pixels under the region's own mask.
    ///
    /// Rasterizes the outline over its bounding box, independent of any
    /// source buffer. This is a full O(area) pass; callers that need it
    /// repeatedly should compute it once.
    pub fn pixel_count(&self) -> u64 {
        let b = self.bounds;
        let mut count = 0u64;
        for y in b.y..b.bottom() {
            for x in b.x..b.right() {
                if self.outline.contains(x as f64 + 0.5, y as f64 + 0.5) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Apply a centered affine scale to the outline.
    ///
    /// Every vertex maps through `p' = c + scale * (p - c)` where `c` is
    /// the bounding-box center. `scale == 1` returns an unmodified clone
    /// so repeated no-op calls cannot accumulate floating-point drift.
    /// Callers validate that `scale` is positive before invoking.
    pub fn scaled(&self, scale: f64) -> Region {
        if scale == 1.0 {
            return self.clone();
        }
        let (cx, cy) = self.bounds.center();
        let outline = self.outline.map_vertices(|x, y| {
            (
                (cx + scale * (x as f64 - cx)) as f32,
                (cy + scale * (y as f64 - cy)) as f32,
            )
        });
        Region::from_outline(outline)
    }
}
