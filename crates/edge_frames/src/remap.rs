//! Mapping of edge cells from the input raster onto the X-Y display.
//!
//! The image origin is top-left with y growing downward; the display origin is
//! bottom-left with y growing upward. Rows are therefore flipped before the
//! vertical offset is applied.

use crate::{
    config::{RemapConfig, RoundingMode},
    types::{EdgeMask, XyPoint},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateRemapper {
    pub config: RemapConfig,
    pub rounding: RoundingMode,
}

impl CoordinateRemapper {
    pub fn new(config: RemapConfig, rounding: RoundingMode) -> Self {
        Self { config, rounding }
    }

    /// Map a single input cell to the output space
    pub fn remap_cell(&self, row: u32, col: u32) -> XyPoint {
        let c = &self.config;
        let x = (f64::from(col) / f64::from(c.in_width)) * f64::from(c.out_width);
        let y = (1.0 - f64::from(row) / f64::from(c.in_height)) * f64::from(c.out_height)
            + f64::from(c.out_y_offset);

        XyPoint::new(self.rounding.round(x) as i32, self.rounding.round(y) as i32)
    }

    /// Map every edge cell of the mask, in row-major scan order.
    ///
    /// Scaling uses the configured input dimensions, not the mask's own.
    pub fn remap(&self, mask: &EdgeMask) -> Vec<XyPoint> {
        if mask.width() != self.config.in_width || mask.height() != self.config.in_height {
            tracing::warn!(
                "Edge mask is {}x{} but remapping assumes {}x{}",
                mask.width(),
                mask.height(),
                self.config.in_width,
                self.config.in_height
            );
        }

        mask.edge_cells()
            .map(|(row, col)| self.remap_cell(row, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_mask(cells: &[(u32, u32)]) -> EdgeMask {
        EdgeMask::from_cells(480, 360, cells)
    }

    #[test]
    fn test_empty_mask_yields_no_points() {
        let remapper = CoordinateRemapper::default();
        assert!(remapper.remap(&standard_mask(&[])).is_empty());
    }

    #[test]
    fn test_top_left_maps_to_top_of_display() {
        let remapper = CoordinateRemapper::default();
        let points = remapper.remap(&standard_mask(&[(0, 0)]));
        assert_eq!(points, vec![XyPoint::new(0, 224)]);
    }

    #[test]
    fn test_bottom_right_cell() {
        let remapper = CoordinateRemapper::default();
        // x = 479/480 * 256 = 255.47, y = (1 - 359/360) * 192 + 32 = 32.53
        let points = remapper.remap(&standard_mask(&[(359, 479)]));
        assert_eq!(points, vec![XyPoint::new(255, 33)]);
    }

    #[test]
    fn test_output_follows_row_major_scan() {
        let remapper = CoordinateRemapper::default();
        let mask = standard_mask(&[(180, 240), (0, 240), (180, 0)]);
        let points = remapper.remap(&mask);

        assert_eq!(
            points,
            vec![
                XyPoint::new(128, 224),
                XyPoint::new(0, 128),
                XyPoint::new(128, 128),
            ]
        );
    }

    #[test]
    fn test_one_point_per_edge_cell() {
        let remapper = CoordinateRemapper::default();
        // Neighbouring cells collapse onto the same output point but are all kept
        let cells: Vec<(u32, u32)> = (0..10).flat_map(|r| (0..10).map(move |c| (r, c))).collect();
        let mask = standard_mask(&cells);

        let points = remapper.remap(&mask);
        assert_eq!(points.len(), mask.edge_count());
        assert_eq!(points.len(), 100);
    }

    #[test]
    fn test_rounding_mode_changes_ties() {
        let config = RemapConfig {
            in_width: 4,
            in_height: 4,
            out_width: 2,
            out_height: 4,
            out_y_offset: 0,
        };
        let even = CoordinateRemapper::new(config.clone(), RoundingMode::HalfToEven);
        let away = CoordinateRemapper::new(config, RoundingMode::HalfAwayFromZero);

        // col 1 -> 1/4 * 2 = 0.5
        assert_eq!(even.remap_cell(0, 1).x, 0);
        assert_eq!(away.remap_cell(0, 1).x, 1);
        // col 3 -> 3/4 * 2 = 1.5
        assert_eq!(even.remap_cell(0, 3).x, 2);
        assert_eq!(away.remap_cell(0, 3).x, 2);
    }

    #[test]
    fn test_configured_dimensions_drive_scaling() {
        let remapper = CoordinateRemapper::default();
        // A smaller mask is still scaled as if it were 480x360
        let mask = EdgeMask::from_cells(240, 180, &[(90, 120)]);
        assert_eq!(remapper.remap(&mask), vec![XyPoint::new(64, 176)]);
    }
}
