//! Region ordering
//!
//! Imposes the caller-visible ordering on a region sequence. All sorts
//! are stable: regions with equal keys keep their input order.

use crate::region::Region;

/// Sort key for region ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by bounding-box left edge
    #[default]
    ByX,
    /// Ascending by bounding-box top edge
    ByY,
    /// Ascending by the sum of left and top edges
    ByXYSum,
    /// Descending by perimeter length
    ByLengthDesc,
    /// Descending by pixel count under the region's own mask
    BySurfaceDesc,
}

/// Return the regions ordered by `key`; the input is left untouched.
///
/// The length and surface keys are computed once per region up front
/// rather than inside the comparator; surface in particular is a full
/// rasterization pass per region.
pub fn sort_regions(regions: &[Region], key: SortKey) -> Vec<Region> {
    let mut out: Vec<Region> = regions.to_vec();
    match key {
        SortKey::ByX => out.sort_by_key(|r| r.bounds().x),
        SortKey::ByY => out.sort_by_key(|r| r.bounds().y),
        SortKey::ByXYSum => out.sort_by_key(|r| r.bounds().x + r.bounds().y),
        SortKey::ByLengthDesc => {
            let mut keyed: Vec<(f64, Region)> =
                out.into_iter().map(|r| (r.perimeter(), r)).collect();
            keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
            return keyed.into_iter().map(|(_, r)| r).collect();
        }
        SortKey::BySurfaceDesc => {
            let mut keyed: Vec<(u64, Region)> =
                out.into_iter().map(|r| (r.pixel_count(), r)).collect();
            keyed.sort_by(|a, b| b.0.cmp(&a.0));
            return keyed.into_iter().map(|(_, r)| r).collect();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use roikit_core::Polygon;

    fn square_region(x: f32, y: f32, side: f32) -> Region {
        Region::from_outline(
            Polygon::new(vec![
                (x, y),
                (x + side, y),
                (x + side, y + side),
                (x, y + side),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn by_x_is_nondecreasing() {
        let regions = vec![
            square_region(9.0, 0.0, 2.0),
            square_region(1.0, 5.0, 2.0),
            square_region(4.0, 2.0, 2.0),
        ];
        let sorted = sort_regions(&regions, SortKey::ByX);
        let xs: Vec<_> = sorted.iter().map(|r| r.bounds().x).collect();
        assert_eq!(xs, vec![1, 4, 9]);
        // Input untouched
        assert_eq!(regions[0].bounds().x, 9);
    }

    #[test]
    fn by_x_is_stable_for_equal_keys() {
        let regions = vec![
            square_region(3.0, 7.0, 1.0),
            square_region(3.0, 1.0, 1.0),
            square_region(3.0, 4.0, 1.0),
        ];
        let sorted = sort_regions(&regions, SortKey::ByX);
        let ys: Vec<_> = sorted.iter().map(|r| r.bounds().y).collect();
        assert_eq!(ys, vec![7, 1, 4]);
    }

    #[test]
    fn by_y_orders_by_top_edge() {
        let regions = vec![
            square_region(0.0, 6.0, 1.0),
            square_region(0.0, 2.0, 1.0),
        ];
        let sorted = sort_regions(&regions, SortKey::ByY);
        assert_eq!(sorted[0].bounds().y, 2);
    }

    #[test]
    fn by_xy_sum_orders_by_corner_sum() {
        let regions = vec![
            square_region(5.0, 5.0, 1.0),
            square_region(0.0, 1.0, 1.0),
            square_region(3.0, 0.0, 1.0),
        ];
        let sorted = sort_regions(&regions, SortKey::ByXYSum);
        let sums: Vec<_> = sorted
            .iter()
            .map(|r| r.bounds().x + r.bounds().y)
            .collect();
        assert_eq!(sums, vec![1, 3, 10]);
    }

    #[test]
    fn by_length_desc_puts_largest_first() {
        let regions = vec![
            square_region(0.0, 0.0, 1.0),
            square_region(3.0, 0.0, 5.0),
            square_region(0.0, 3.0, 2.0),
        ];
        let sorted = sort_regions(&regions, SortKey::ByLengthDesc);
        let sides: Vec<_> = sorted.iter().map(|r| r.bounds().w).collect();
        assert_eq!(sides, vec![5, 2, 1]);
    }

    #[test]
    fn by_surface_desc_uses_own_mask_pixel_count() {
        let regions = vec![
            square_region(0.0, 0.0, 2.0),
            square_region(4.0, 0.0, 3.0),
        ];
        let sorted = sort_regions(&regions, SortKey::BySurfaceDesc);
        assert_eq!(sorted[0].bounds().w, 3);
        assert_eq!(sorted[1].bounds().w, 2);
    }
}
