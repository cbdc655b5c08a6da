pub mod builder;

use tracing::{debug, info};
use crate::{
    config::FrameSequence,
    error::Result,
    remap::CoordinateRemapper,
    traits::{EdgeDetector, FrameSink, FrameSource},
    types::{FrameCoordinates, FrameSlot, RunSummary},
};

/// The driving loop: load, detect, remap, and hand each frame to a sink
pub struct FramePipeline {
    source: Box<dyn FrameSource>,
    detector: Box<dyn EdgeDetector>,
    remapper: CoordinateRemapper,
    sequence: FrameSequence,
}

impl FramePipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::FramePipelineBuilder {
        builder::FramePipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn EdgeDetector>,
        remapper: CoordinateRemapper,
        sequence: FrameSequence,
    ) -> Self {
        Self {
            source,
            detector,
            remapper,
            sequence,
        }
    }

    /// Process a single frame through detection and remapping
    pub fn process_frame(&self, slot: FrameSlot) -> Result<FrameCoordinates> {
        let image = self.source.load(slot)?;
        let mask = self.detector.detect(&image)?;
        let points = self.remapper.remap(&mask);

        debug!(
            "Frame {} (file {}): {} edge points",
            slot.ordinal,
            slot.file_number(),
            points.len()
        );

        Ok(FrameCoordinates { slot, points })
    }

    /// Process every frame of the sequence in order, stopping at the first error
    pub fn run<S: FrameSink + ?Sized>(&self, sink: &mut S) -> Result<RunSummary> {
        info!("Processing {} frames from {}", self.sequence.frame_count, self.source.description());

        sink.begin(self.sequence.frame_count)?;

        let mut summary = RunSummary::default();
        for slot in self.sequence.slots() {
            let frame = self.process_frame(slot)?;
            sink.write_frame(&frame)?;

            summary.frames += 1;
            summary.points += frame.len();
        }

        sink.finish()?;

        info!("Processed {} frames, {} points", summary.frames, summary.points);
        Ok(summary)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        let r = &self.remapper.config;
        format!(
            "Pipeline: {} frames (stride {}) from {}, {}x{} -> {}x{} (y offset {}, {} rounding)",
            self.sequence.frame_count,
            self.sequence.stride,
            self.source.description(),
            r.in_width,
            r.in_height,
            r.out_width,
            r.out_height,
            r.out_y_offset,
            self.remapper.rounding
        )
    }
}
