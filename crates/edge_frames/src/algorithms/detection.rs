use image::GrayImage;
use crate::{
    config::CannySettings,
    error::Result,
    traits::EdgeDetector,
    types::EdgeMask,
};

/// Canny edge detector backed by imageproc
#[derive(Debug, Clone)]
pub struct CannyEdgeDetector {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for CannyEdgeDetector {
    fn default() -> Self {
        Self::from(&CannySettings::default())
    }
}

impl From<&CannySettings> for CannyEdgeDetector {
    fn from(settings: &CannySettings) -> Self {
        Self {
            low_threshold: settings.low_threshold,
            high_threshold: settings.high_threshold,
        }
    }
}

impl EdgeDetector for CannyEdgeDetector {
    fn detect(&self, image: &GrayImage) -> Result<EdgeMask> {
        let edges = imageproc::edges::canny(image, self.low_threshold, self.high_threshold);
        Ok(EdgeMask::from_image(edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn create_square_image() -> GrayImage {
        let mut img = GrayImage::new(120, 90);
        for y in 30..60 {
            for x in 40..80 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
        img
    }

    #[test]
    fn test_uniform_frame_has_no_edges() {
        let detector = CannyEdgeDetector::default();
        let mask = detector.detect(&GrayImage::from_pixel(120, 90, Luma([200u8])))
            .expect("Should detect");
        assert_eq!(mask.edge_count(), 0);
        assert_eq!((mask.width(), mask.height()), (120, 90));
    }

    #[test]
    fn test_square_edges_stay_near_border() {
        let detector = CannyEdgeDetector::default();
        let mask = detector.detect(&create_square_image()).expect("Should detect");

        assert!(mask.edge_count() > 0, "Should find the square outline");
        for (row, col) in mask.edge_cells() {
            let near_x = (36..=84).contains(&col);
            let near_y = (26..=64).contains(&row);
            assert!(near_x && near_y, "Edge at ({row}, {col}) is far from the square");
        }
        assert!(!mask.is_edge(45, 60), "Interior should not be an edge");
    }
}
