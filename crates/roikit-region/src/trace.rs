//! Mask decomposition: crack-edge contour following
//!
//! Turns a binary mask into closed outlines. The tracer walks the
//! "cracks" between foreground and background pixels, so every outline
//! lies on the pixel lattice and rasterizes back to exactly the pixels
//! it was traced from. Each closed loop becomes one polygon: a solid
//! blob yields its outer boundary, and every hole yields a separate
//! loop of its own.
//!
//! Foreground is any pixel with nonzero intensity. Diagonally touching
//! foreground pixels are treated as connected (8-connectivity), which
//! is resolved at the ambiguous lattice vertices by preferring the
//! right turn.

use roikit_core::{PixelBuffer, Polygon};

const RIGHT: (i32, i32) = (1, 0);
const DOWN: (i32, i32) = (0, 1);
const LEFT: (i32, i32) = (-1, 0);
const UP: (i32, i32) = (0, -1);

/// Decompose a mask into closed outlines, in scan-discovery order.
pub fn trace_outlines(mask: &PixelBuffer) -> Vec<Polygon> {
    let tracer = Tracer::new(mask);
    tracer.run()
}

struct Tracer<'a> {
    mask: &'a PixelBuffer,
    w: i32,
    h: i32,
    /// Visited horizontal crack segments: (x in 0..w, y in 0..=h)
    visited_h: Vec<bool>,
    /// Visited vertical crack segments: (x in 0..=w, y in 0..h)
    visited_v: Vec<bool>,
}

impl<'a> Tracer<'a> {
    fn new(mask: &'a PixelBuffer) -> Self {
        let w = mask.width() as i32;
        let h = mask.height() as i32;
        Self {
            mask,
            w,
            h,
            visited_h: vec![false; (w as usize) * (h as usize + 1)],
            visited_v: vec![false; (w as usize + 1) * (h as usize)],
        }
    }

    fn run(mut self) -> Vec<Polygon> {
        let mut outlines = Vec::new();
        // Every loop contains at least one horizontal segment, so a scan
        // over horizontal segments discovers every loop exactly once.
        for y in 0..=self.h {
            for x in 0..self.w {
                if self.visited_h[(y * self.w + x) as usize] {
                    continue;
                }
                if self.edge_exists(x, y, RIGHT) {
                    outlines.push(self.follow(x, y, RIGHT));
                } else if self.edge_exists(x + 1, y, LEFT) {
                    outlines.push(self.follow(x + 1, y, LEFT));
                }
            }
        }
        outlines
    }

    #[inline]
    fn fg(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.w || y >= self.h {
            return false;
        }
        self.mask
            .intensity(x as u32, y as u32)
            .is_some_and(|v| v != 0)
    }

    /// Is there a directed crack edge leaving vertex (x, y) toward `dir`?
    ///
    /// A directed edge exists when the foreground pixel lies on one
    /// fixed side of the crack, so every undirected boundary segment
    /// carries exactly one direction.
    fn edge_exists(&self, x: i32, y: i32, dir: (i32, i32)) -> bool {
        match dir {
            RIGHT => self.fg(x, y - 1) && !self.fg(x, y),
            DOWN => self.fg(x, y) && !self.fg(x - 1, y),
            LEFT => self.fg(x - 1, y) && !self.fg(x - 1, y - 1),
            UP => self.fg(x - 1, y - 1) && !self.fg(x, y - 1),
            _ => false,
        }
    }

    fn mark(&mut self, x: i32, y: i32, dir: (i32, i32)) {
        match dir {
            RIGHT => self.visited_h[(y * self.w + x) as usize] = true,
            LEFT => self.visited_h[(y * self.w + x - 1) as usize] = true,
            DOWN => self.visited_v[(y * (self.w + 1) + x) as usize] = true,
            UP => self.visited_v[((y - 1) * (self.w + 1) + x) as usize] = true,
            _ => {}
        }
    }

    /// Follow one closed loop starting from the given directed edge.
    fn follow(&mut self, sx: i32, sy: i32, sdir: (i32, i32)) -> Polygon {
        let mut pts: Vec<(f32, f32)> = vec![(sx as f32, sy as f32)];
        let (mut x, mut y) = (sx, sy);
        let mut dir = sdir;

        loop {
            self.mark(x, y, dir);
            x += dir.0;
            y += dir.1;

            let next = self.next_dir(x, y, dir);
            if (x, y) == (sx, sy) && next == sdir {
                break;
            }
            if next != dir {
                pts.push((x as f32, y as f32));
            }
            dir = next;
        }

        // Closed crack loops always have >= 4 corners.
        Polygon::new(pts).expect("crack loop degenerate")
    }

    /// Outgoing direction at a vertex, given the incoming direction.
    ///
    /// At the ambiguous vertex (two diagonal foreground pixels) both
    /// turns exist; taking the right turn keeps diagonal neighbors in a
    /// single loop.
    fn next_dir(&self, x: i32, y: i32, incoming: (i32, i32)) -> (i32, i32) {
        let right = (-incoming.1, incoming.0);
        let left = (incoming.1, -incoming.0);
        for cand in [right, incoming, left] {
            if self.edge_exists(x, y, cand) {
                return cand;
            }
        }
        unreachable!("crack boundary loop is not closed at ({x}, {y})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roikit_core::{PixelKind, Rect};

    fn mask_from(width: u32, height: u32, on: &[(u32, u32)]) -> PixelBuffer {
        let mut mask = PixelBuffer::new(width, height, PixelKind::Grayscale8).unwrap();
        for &(x, y) in on {
            mask.set(x, y, 255).unwrap();
        }
        mask
    }

    #[test]
    fn empty_mask_yields_no_outlines() {
        let mask = mask_from(8, 8, &[]);
        assert!(trace_outlines(&mask).is_empty());
    }

    #[test]
    fn single_pixel_outline() {
        let mask = mask_from(4, 4, &[(1, 2)]);
        let outlines = trace_outlines(&mask);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].bounds(), Rect::new_unchecked(1, 2, 1, 1));
        assert!((outlines[0].perimeter() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn solid_block_outline() {
        let mut on = Vec::new();
        for y in 1..4 {
            for x in 2..6 {
                on.push((x, y));
            }
        }
        let mask = mask_from(8, 8, &on);
        let outlines = trace_outlines(&mask);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].bounds(), Rect::new_unchecked(2, 1, 4, 3));
        assert!((outlines[0].perimeter() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn two_blocks_two_outlines() {
        let mask = mask_from(10, 10, &[(1, 1), (8, 8)]);
        let outlines = trace_outlines(&mask);
        assert_eq!(outlines.len(), 2);
    }

    #[test]
    fn block_at_border_is_traced() {
        let mask = mask_from(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let outlines = trace_outlines(&mask);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].bounds(), Rect::new_unchecked(0, 0, 2, 2));
    }

    #[test]
    fn ring_yields_outer_and_hole_outlines() {
        // 3x3 ring with a hole at (2, 2)
        let mut on = Vec::new();
        for y in 1..4 {
            for x in 1..4 {
                if (x, y) != (2, 2) {
                    on.push((x, y));
                }
            }
        }
        let mask = mask_from(6, 6, &on);
        let mut outlines = trace_outlines(&mask);
        assert_eq!(outlines.len(), 2);
        outlines.sort_by_key(|p| p.bounds().area());
        assert_eq!(outlines[0].bounds(), Rect::new_unchecked(2, 2, 1, 1));
        assert_eq!(outlines[1].bounds(), Rect::new_unchecked(1, 1, 3, 3));
    }

    #[test]
    fn diagonal_pixels_form_one_loop() {
        let mask = mask_from(4, 4, &[(0, 0), (1, 1)]);
        let outlines = trace_outlines(&mask);
        assert_eq!(outlines.len(), 1);
        assert!((outlines[0].perimeter() - 8.0).abs() < 1e-9);
        assert_eq!(outlines[0].bounds(), Rect::new_unchecked(0, 0, 2, 2));
    }

    #[test]
    fn full_frame_foreground() {
        let mut on = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                on.push((x, y));
            }
        }
        let mask = mask_from(3, 3, &on);
        let outlines = trace_outlines(&mask);
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].bounds(), Rect::new_unchecked(0, 0, 3, 3));
        assert!((outlines[0].perimeter() - 12.0).abs() < 1e-9);
    }
}
