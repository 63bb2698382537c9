//! Mask to region decomposition

use crate::error::RegionResult;
use crate::region::Region;
use crate::trace::trace_outlines;
use roikit_core::PixelBuffer;

/// Decompose a binary mask into regions, one per closed outline.
///
/// Any nonzero pixel is foreground. Outlines come back in
/// scan-discovery order (top to bottom, left to right); a blob with a
/// hole contributes two sibling regions, the outer boundary and the
/// hole. An all-background mask yields an empty vector.
pub fn extract_regions_from_mask(mask: &PixelBuffer) -> RegionResult<Vec<Region>> {
    let outlines = trace_outlines(mask);
    log::debug!(
        "traced {} outline(s) from {}x{} mask",
        outlines.len(),
        mask.width(),
        mask.height()
    );
    Ok(outlines.into_iter().map(Region::from_outline).collect())
}
