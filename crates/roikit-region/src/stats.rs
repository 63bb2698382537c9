//! Per-region statistics against a source buffer
//!
//! Statistics are computed on demand and never cached: the source
//! buffer may change between calls, and regions carry no link back to
//! the buffer they were extracted from.

use crate::error::{RegionError, RegionResult};
use crate::region::Region;
use crate::selection::Selection;
use roikit_core::PixelBuffer;
use serde::Serialize;

/// Numeric summary of a buffer restricted to one region.
///
/// Serializes to the record-per-region report shape consumed by
/// scripting layers (camelCase keys, `surface` for the pixel count,
/// `contour` for the perimeter length).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    /// Bounding-box left edge
    pub x: i32,
    /// Bounding-box top edge
    pub y: i32,
    /// Bounding-box width
    pub width: i32,
    /// Bounding-box height
    pub height: i32,
    /// Number of pixels inside the outline
    #[serde(rename = "surface")]
    pub pixel_count: u64,
    /// Intensity-weighted centroid
    pub x_center_of_mass: f64,
    pub y_center_of_mass: f64,
    /// Unweighted geometric centroid
    pub x_centroid: f64,
    pub y_centroid: f64,
    /// Per-intensity-level pixel counts (256 bins)
    pub histogram: Vec<u64>,
    /// Outline length
    #[serde(rename = "contour")]
    pub perimeter: f64,
    /// Corner radius of rounded-rectangle outlines; traced mask
    /// outlines always report 0
    #[serde(rename = "roundRectArcSize")]
    pub corner_radius: f64,
}

/// Compute statistics for `region` against `buffer`.
///
/// The buffer is read through a scoped [`Selection`]; its pixel values
/// are never modified. Coordinates are measured at pixel centers, so a
/// single-pixel region at (3, 4) has centroid (3.5, 4.5).
///
/// When the region covers no buffer pixels the centroids fall back to
/// 0; when the total intensity is zero the center of mass falls back to
/// the geometric centroid.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the region's bounds
/// are not fully contained in the buffer.
pub fn region_statistics(buffer: &PixelBuffer, region: &Region) -> RegionResult<RegionStats> {
    let bounds = region.bounds();
    if !buffer.extent().contains_rect(&bounds) {
        return Err(RegionError::DimensionMismatch {
            bounds,
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let mut pixel_count = 0u64;
    let mut histogram = vec![0u64; 256];
    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut mass = 0.0f64;
    let mut mass_x = 0.0f64;
    let mut mass_y = 0.0f64;

    let selection = Selection::new(buffer, region);
    for (x, y, value) in selection.pixels() {
        let cx = x as f64 + 0.5;
        let cy = y as f64 + 0.5;
        pixel_count += 1;
        histogram[value as usize] += 1;
        sum_x += cx;
        sum_y += cy;
        mass += value as f64;
        mass_x += cx * value as f64;
        mass_y += cy * value as f64;
    }

    let (x_centroid, y_centroid) = if pixel_count > 0 {
        (sum_x / pixel_count as f64, sum_y / pixel_count as f64)
    } else {
        (0.0, 0.0)
    };
    let (x_center_of_mass, y_center_of_mass) = if mass > 0.0 {
        (mass_x / mass, mass_y / mass)
    } else {
        (x_centroid, y_centroid)
    };

    Ok(RegionStats {
        x: bounds.x,
        y: bounds.y,
        width: bounds.w,
        height: bounds.h,
        pixel_count,
        x_center_of_mass,
        y_center_of_mass,
        x_centroid,
        y_centroid,
        histogram,
        perimeter: region.perimeter(),
        corner_radius: 0.0,
    })
}
