//! Polygon - closed planar outlines
//!
//! Outlines produced by mask decomposition follow pixel boundaries, so
//! their vertices are integral, but the type keeps floating-point
//! vertices so that affine scaling does not lose precision.

use crate::error::{Error, Result};
use crate::rect::Rect;

/// A closed polygon. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    verts: Vec<(f32, f32)>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given.
    pub fn new(verts: Vec<(f32, f32)>) -> Result<Self> {
        if verts.len() < 3 {
            return Err(Error::InvalidParameter(format!(
                "polygon needs at least 3 vertices, got {}",
                verts.len()
            )));
        }
        Ok(Self { verts })
    }

    /// Vertices in order. The closing edge is implicit.
    #[inline]
    pub fn vertices(&self) -> &[(f32, f32)] {
        &self.verts
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Integer bounding rectangle covering all vertices.
    pub fn bounds(&self) -> Rect {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for &(x, y) in &self.verts {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let x = min_x.floor() as i32;
        let y = min_y.floor() as i32;
        Rect::new_unchecked(x, y, max_x.ceil() as i32 - x, max_y.ceil() as i32 - y)
    }

    /// Total edge length, including the closing edge.
    pub fn perimeter(&self) -> f64 {
        let n = self.verts.len();
        let mut total = 0.0;
        for i in 0..n {
            let (x0, y0) = self.verts[i];
            let (x1, y1) = self.verts[(i + 1) % n];
            let dx = (x1 - x0) as f64;
            let dy = (y1 - y0) as f64;
            total += (dx * dx + dy * dy).sqrt();
        }
        total
    }

    /// Even-odd containment test for a point.
    ///
    /// Pixel membership tests pass the pixel center `(x + 0.5, y + 0.5)`;
    /// against outlines traced on pixel boundaries the half-integer
    /// offset keeps the ray away from every vertex.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let n = self.verts.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (self.verts[i].0 as f64, self.verts[i].1 as f64);
            let (xj, yj) = (self.verts[j].0 as f64, self.verts[j].1 as f64);
            if (yi > py) != (yj > py) {
                let x_cross = xi + (py - yi) * (xj - xi) / (yj - yi);
                if px < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Apply a point map to every vertex, producing a new polygon.
    pub fn map_vertices(&self, f: impl Fn(f32, f32) -> (f32, f32)) -> Polygon {
        Polygon {
            verts: self.verts.iter().map(|&(x, y)| f(x, y)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap()
    }

    #[test]
    fn too_few_vertices_rejected() {
        assert!(Polygon::new(vec![(0.0, 0.0), (1.0, 1.0)]).is_err());
    }

    #[test]
    fn square_bounds_and_perimeter() {
        let p = unit_square();
        assert_eq!(p.bounds(), Rect::new_unchecked(0, 0, 4, 4));
        assert!((p.perimeter() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn containment_at_pixel_centers() {
        let p = unit_square();
        assert!(p.contains(0.5, 0.5));
        assert!(p.contains(3.5, 3.5));
        assert!(!p.contains(4.5, 0.5));
        assert!(!p.contains(-0.5, 2.0));
    }

    #[test]
    fn map_vertices_scales() {
        let p = unit_square();
        let doubled = p.map_vertices(|x, y| (x * 2.0, y * 2.0));
        assert_eq!(doubled.bounds(), Rect::new_unchecked(0, 0, 8, 8));
        assert!((doubled.perimeter() - 32.0).abs() < 1e-9);
    }
}
