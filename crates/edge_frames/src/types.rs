use std::fmt;

use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

/// A point in the output coordinate space of the X-Y display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XyPoint {
    pub x: i32,
    pub y: i32,
}

impl XyPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact in integer arithmetic
    pub fn distance_squared(&self, other: &XyPoint) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl fmt::Display for XyPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Displays a slice of points as `[(x, y), (x, y)]`, the listing format
pub struct PointList<'a>(pub &'a [XyPoint]);

impl fmt::Display for PointList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str("]")
    }
}

/// Binary edge raster produced by an edge detector.
///
/// Any non-zero cell is an edge. Cells are addressed as `(row, col)`.
#[derive(Debug, Clone)]
pub struct EdgeMask {
    image: GrayImage,
}

impl EdgeMask {
    pub fn from_image(image: GrayImage) -> Self {
        Self { image }
    }

    /// Build a mask with the given `(row, col)` cells marked.
    ///
    /// Cells outside the raster are ignored.
    pub fn from_cells(width: u32, height: u32, cells: &[(u32, u32)]) -> Self {
        let mut image = GrayImage::new(width, height);
        for &(row, col) in cells {
            if let Some(pixel) = image.get_pixel_mut_checked(col, row) {
                *pixel = Luma([255u8]);
            }
        }
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_edge(&self, row: u32, col: u32) -> bool {
        self.image
            .get_pixel_checked(col, row)
            .is_some_and(|p| p[0] != 0)
    }

    /// Edge cells as `(row, col)` in row-major scan order
    pub fn edge_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.image
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel[0] != 0)
            .map(|(col, row, _)| (row, col))
    }

    pub fn edge_count(&self) -> usize {
        self.image.pixels().filter(|p| p[0] != 0).count()
    }
}

/// Position of one processed frame within the run and the source set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSlot {
    /// Position in the output, `0..frame_count`
    pub ordinal: usize,
    /// 0-based index into the source frame set
    pub source_index: usize,
}

impl FrameSlot {
    /// 1-based number used in frame file names
    pub fn file_number(&self) -> usize {
        self.source_index + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameCoordinates {
    pub slot: FrameSlot,
    pub points: Vec<XyPoint>,
}

impl FrameCoordinates {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point_list(&self) -> PointList<'_> {
        PointList(&self.points)
    }
}

/// Totals reported after a pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: usize,
    pub points: usize,
}
