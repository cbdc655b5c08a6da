use std::path::PathBuf;

use image::GrayImage;
use crate::{
    config::{FrameSequence, FRAME_NUMBER_PLACEHOLDER},
    error::{EdgeFramesError, Result},
    traits::FrameSource,
    types::FrameSlot,
};

/// Numbered image files on disk, e.g. `frames/frame1.png`, `frames/frame2.png`
#[derive(Debug, Clone)]
pub struct PngSequenceSource {
    pub path_template: String,
}

impl Default for PngSequenceSource {
    fn default() -> Self {
        Self::from(&FrameSequence::default())
    }
}

impl From<&FrameSequence> for PngSequenceSource {
    fn from(sequence: &FrameSequence) -> Self {
        Self::new(sequence.path_template.clone())
    }
}

impl PngSequenceSource {
    pub fn new(path_template: impl Into<String>) -> Self {
        Self {
            path_template: path_template.into(),
        }
    }

    /// Path of the frame with the given 1-based number
    pub fn frame_path(&self, file_number: usize) -> PathBuf {
        PathBuf::from(
            self.path_template
                .replace(FRAME_NUMBER_PLACEHOLDER, &file_number.to_string()),
        )
    }
}

impl FrameSource for PngSequenceSource {
    fn load(&self, slot: FrameSlot) -> Result<GrayImage> {
        let path = self.frame_path(slot.file_number());
        let img = image::open(&path)
            .map_err(|source| EdgeFramesError::FrameLoad { path, source })?;
        Ok(img.to_luma8())
    }

    fn description(&self) -> String {
        format!("Image sequence: {}", self.path_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_frame_path_uses_one_based_number() {
        let source = PngSequenceSource::default();
        let slot = FrameSlot { ordinal: 3, source_index: 6 };
        assert_eq!(source.frame_path(slot.file_number()), PathBuf::from("frames/frame7.png"));
    }

    #[test]
    fn test_missing_frame_reports_path() {
        let source = PngSequenceSource::new("does/not/exist/frame{}.png");
        let err = source
            .load(FrameSlot { ordinal: 0, source_index: 0 })
            .expect_err("Should fail for a missing file");

        match err {
            EdgeFramesError::FrameLoad { path, .. } => {
                assert_eq!(path, PathBuf::from("does/not/exist/frame1.png"));
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_loads_frame_as_grayscale() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let template = dir.path().join("frame{}.png").to_string_lossy().to_string();
        let source = PngSequenceSource::new(template);

        let image = GrayImage::from_pixel(8, 6, Luma([42u8]));
        image.save(source.frame_path(3)).expect("Should write frame");

        let loaded = source
            .load(FrameSlot { ordinal: 1, source_index: 2 })
            .expect("Should load frame 3");
        assert_eq!(loaded.dimensions(), (8, 6));
        assert_eq!(loaded.get_pixel(0, 0)[0], 42);
    }
}
