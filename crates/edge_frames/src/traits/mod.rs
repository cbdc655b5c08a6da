use image::GrayImage;
use crate::{
    error::Result,
    types::{EdgeMask, FrameCoordinates, FrameSlot, XyPoint},
};

/// Supplies grayscale frames by slot
pub trait FrameSource: Send + Sync {
    /// Load the frame for the given slot
    fn load(&self, slot: FrameSlot) -> Result<GrayImage>;

    /// Get a human-readable description of this source
    fn description(&self) -> String;
}

/// Trait for edge detection algorithms
pub trait EdgeDetector: Send + Sync {
    /// Produce a same-size binary mask of edge pixels
    fn detect(&self, image: &GrayImage) -> Result<EdgeMask>;
}

/// Receives the per-frame coordinate lists of a run
pub trait FrameSink {
    /// Called once before any frame with the number of frames to follow
    fn begin(&mut self, total_frames: usize) -> Result<()>;

    fn write_frame(&mut self, frame: &FrameCoordinates) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Trait for turning an unordered point cloud into a drawing path
pub trait PointSequencer: Send + Sync {
    fn sequence(&self, points: &[XyPoint]) -> Vec<XyPoint>;
}
