//! Region filtering by geometric and photometric bounds
//!
//! Retains the regions whose perimeter length, bounding-box extent, and
//! (optionally) surface fall inside the configured inclusive bounds.
//! Surface is the number of buffer pixels under the region's mask and
//! is by far the most expensive criterion, so it is only computed when
//! a surface bound actually constrains.

use crate::error::{RegionError, RegionResult};
use crate::region::Region;
use crate::selection::Selection;
use roikit_core::PixelBuffer;

/// Bounds for region filtering. Every bound is inclusive and defaults
/// to "unbounded"; `scale` is applied to each region before any
/// criterion is evaluated and defaults to the no-op 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBounds {
    pub min_length: f64,
    pub max_length: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub min_surface: u64,
    pub max_surface: u64,
    pub scale: f64,
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            min_length: 0.0,
            max_length: f64::INFINITY,
            min_width: 0.0,
            max_width: f64::INFINITY,
            min_height: 0.0,
            max_height: f64::INFINITY,
            min_surface: 0,
            max_surface: u64::MAX,
            scale: 1.0,
        }
    }
}

impl FilterBounds {
    /// Check the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidBounds`] when `scale` is not a
    /// positive finite number or any max bound is smaller than its min.
    pub fn validate(&self) -> RegionResult<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(RegionError::InvalidBounds(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        let pairs = [
            ("length", self.min_length, self.max_length),
            ("width", self.min_width, self.max_width),
            ("height", self.min_height, self.max_height),
        ];
        for (name, min, max) in pairs {
            if min > max {
                return Err(RegionError::InvalidBounds(format!(
                    "min {name} {min} exceeds max {name} {max}"
                )));
            }
        }
        if self.min_surface > self.max_surface {
            return Err(RegionError::InvalidBounds(format!(
                "min surface {} exceeds max surface {}",
                self.min_surface, self.max_surface
            )));
        }
        Ok(())
    }

    /// Whether a surface bound actually constrains.
    pub fn has_surface_bounds(&self) -> bool {
        self.min_surface > 0 || self.max_surface < u64::MAX
    }

    /// Whether these bounds pass every region unchanged.
    pub fn is_permissive(&self) -> bool {
        *self == FilterBounds::default()
    }
}

/// Filter regions against `bounds`, preserving input order.
///
/// Scaling (when `bounds.scale != 1`) is applied before any criterion
/// is evaluated, and the scaled region is what ends up in the output.
/// `buffer` is only consulted when a surface bound constrains.
///
/// # Errors
///
/// Returns [`RegionError::InvalidBounds`] for a contradictory
/// configuration; an empty input yields an empty output, not an error.
pub fn filter_regions(
    regions: &[Region],
    buffer: &PixelBuffer,
    bounds: &FilterBounds,
) -> RegionResult<Vec<Region>> {
    bounds.validate()?;

    // Default bounds pass everything and scale by 1, so the per-region
    // measurement loop has nothing to do.
    if bounds.is_permissive() {
        return Ok(regions.to_vec());
    }

    let need_surface = bounds.has_surface_bounds();
    let mut selected = Vec::new();

    for region in regions {
        let candidate = if bounds.scale != 1.0 {
            region.scaled(bounds.scale)
        } else {
            region.clone()
        };

        let length = candidate.perimeter();
        let width = candidate.bounds().w as f64;
        let height = candidate.bounds().h as f64;

        if length < bounds.min_length || length > bounds.max_length {
            continue;
        }
        if width < bounds.min_width || width > bounds.max_width {
            continue;
        }
        if height < bounds.min_height || height > bounds.max_height {
            continue;
        }
        if need_surface {
            let surface = Selection::new(buffer, &candidate).pixel_count();
            if surface < bounds.min_surface || surface > bounds.max_surface {
                continue;
            }
        }
        selected.push(candidate);
    }

    Ok(selected)
}
