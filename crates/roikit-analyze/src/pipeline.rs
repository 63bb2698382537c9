//! The mask-to-regions pipeline
//!
//! Ties the lower crates together in the order a script would call
//! them: derive or accept a mask, decompose it, filter, sort. Every
//! stage is also available individually from `roikit-region` and
//! `roikit-color`; this module only fixes the sequencing and the
//! validation that has to happen before any expensive work starts.

use crate::error::{AnalyzeError, AnalyzeResult};
use roikit_color::make_mask;
use roikit_core::PixelBuffer;
use roikit_region::{
    FilterBounds, Region, SortKey, extract_regions_from_mask, filter_regions, sort_regions,
};

/// Extract, filter, and order the regions of `source`.
///
/// When `mask` is `None` one is derived from `source` by automatic
/// thresholding, treating the background as light (dark objects become
/// foreground). Callers with a dark background derive their own mask
/// with [`roikit_color::make_mask`] and pass it in.
///
/// The filter bounds are validated before any decomposition happens.
///
/// # Errors
///
/// - [`AnalyzeError::EmptyRegionSet`] when the mask decomposes to no
///   regions at all. A filter that matches nothing is not an error and
///   returns an empty vector.
/// - A core `DimensionMismatch` when a supplied mask disagrees with
///   `source` in size.
/// - [`roikit_region::RegionError::InvalidBounds`] for contradictory
///   filter bounds.
pub fn extract_regions(
    source: &PixelBuffer,
    mask: Option<&PixelBuffer>,
    bounds: &FilterBounds,
    sort: SortKey,
) -> AnalyzeResult<Vec<Region>> {
    bounds.validate().map_err(AnalyzeError::Region)?;
    if let Some(mask) = mask {
        if mask.extent() != source.extent() {
            return Err(roikit_core::Error::DimensionMismatch {
                expected: (source.width(), source.height()),
                actual: (mask.width(), mask.height()),
            }
            .into());
        }
    }

    let derived;
    let mask = match mask {
        Some(m) => m,
        None => {
            derived = make_mask(source, false)?;
            &derived
        }
    };

    let regions = extract_regions_from_mask(mask)?;
    if regions.is_empty() {
        return Err(AnalyzeError::EmptyRegionSet);
    }
    log::debug!("decomposed mask into {} region(s)", regions.len());

    let kept = filter_regions(&regions, source, bounds)?;
    log::debug!("{} of {} region(s) pass the filter", kept.len(), regions.len());

    Ok(sort_regions(&kept, sort))
}

/// Crop `source` to each region's bounding box.
///
/// Boxes are clipped to the buffer, so a region hanging off the edge
/// yields the in-bounds part of its crop. The crops come back in the
/// regions' order.
pub fn crop_to_regions(
    source: &PixelBuffer,
    regions: &[Region],
) -> AnalyzeResult<Vec<PixelBuffer>> {
    let mut crops = Vec::with_capacity(regions.len());
    for region in regions {
        crops.push(source.crop(region.bounds())?);
    }
    log::debug!("cropped {} region(s)", crops.len());
    Ok(crops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roikit_core::{PixelKind, Rect};

    /// Light page carrying two dark blobs.
    fn scan() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(12, 10, PixelKind::Grayscale8).unwrap();
        buffer.fill(235);
        for y in 2..5 {
            for x in 2..5 {
                buffer.set(x, y, 15).unwrap();
            }
        }
        for y in 6..8 {
            for x in 8..10 {
                buffer.set(x, y, 15).unwrap();
            }
        }
        buffer
    }

    #[test]
    fn default_mask_finds_dark_blobs() {
        let source = scan();
        let regions =
            extract_regions(&source, None, &FilterBounds::default(), SortKey::ByX).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].bounds(), Rect::new_unchecked(2, 2, 3, 3));
        assert_eq!(regions[1].bounds(), Rect::new_unchecked(8, 6, 2, 2));
    }

    #[test]
    fn explicit_mask_overrides_thresholding() {
        let source = scan();
        let mut mask = PixelBuffer::new(12, 10, PixelKind::Grayscale8).unwrap();
        mask.set(0, 0, 255).unwrap();
        let regions =
            extract_regions(&source, Some(&mask), &FilterBounds::default(), SortKey::ByX).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bounds(), Rect::new_unchecked(0, 0, 1, 1));
    }

    #[test]
    fn mismatched_mask_is_rejected_before_decomposition() {
        let source = scan();
        let mask = PixelBuffer::new(5, 5, PixelKind::Grayscale8).unwrap();
        let result = extract_regions(&source, Some(&mask), &FilterBounds::default(), SortKey::ByX);
        assert!(matches!(result, Err(AnalyzeError::Core(_))));
    }

    #[test]
    fn blank_source_is_empty_region_set() {
        let mut source = PixelBuffer::new(6, 6, PixelKind::Grayscale8).unwrap();
        source.fill(200);
        let result = extract_regions(&source, None, &FilterBounds::default(), SortKey::ByX);
        assert!(matches!(result, Err(AnalyzeError::EmptyRegionSet)));
    }

    #[test]
    fn filter_matching_nothing_is_not_an_error() {
        let source = scan();
        let bounds = FilterBounds {
            min_surface: 1_000_000,
            ..Default::default()
        };
        let regions = extract_regions(&source, None, &bounds, SortKey::ByX).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn contradictory_bounds_fail_before_any_work() {
        let source = scan();
        let bounds = FilterBounds {
            min_width: 9.0,
            max_width: 1.0,
            ..Default::default()
        };
        let result = extract_regions(&source, None, &bounds, SortKey::ByX);
        assert!(matches!(result, Err(AnalyzeError::Region(_))));
    }

    #[test]
    fn crops_cover_region_bounds() {
        let source = scan();
        let regions =
            extract_regions(&source, None, &FilterBounds::default(), SortKey::ByX).unwrap();
        let crops = crop_to_regions(&source, &regions).unwrap();
        assert_eq!(crops.len(), 2);
        assert_eq!((crops[0].width(), crops[0].height()), (3, 3));
        assert_eq!((crops[1].width(), crops[1].height()), (2, 2));
        assert_eq!(crops[0].intensity(0, 0), Some(15));
    }
}
