//! Per-region statistics reports
//!
//! The JSON shape is one array with one record per region, camelCase
//! keys, in the order the regions were given. Scripting layers index
//! into it positionally.

use crate::error::AnalyzeResult;
use roikit_core::PixelBuffer;
use roikit_region::{Region, RegionStats, region_statistics};

/// Measure every region against `source`, in the regions' order.
///
/// # Errors
///
/// Fails with a region `DimensionMismatch` if any region's bounds are
/// not fully contained in the buffer.
pub fn region_report(source: &PixelBuffer, regions: &[Region]) -> AnalyzeResult<Vec<RegionStats>> {
    let mut records = Vec::with_capacity(regions.len());
    for region in regions {
        records.push(region_statistics(source, region)?);
    }
    log::debug!("measured {} region(s)", records.len());
    Ok(records)
}

/// [`region_report`] serialized as a JSON array.
pub fn region_report_json(source: &PixelBuffer, regions: &[Region]) -> AnalyzeResult<String> {
    let records = region_report(source, regions)?;
    Ok(serde_json::to_string(&records)?)
}
