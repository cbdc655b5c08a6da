use crate::{
    algorithms::CannyEdgeDetector,
    config::{EdgeFramesConfig, FrameSequence, RemapConfig, RoundingMode},
    pipeline::FramePipeline,
    remap::CoordinateRemapper,
    source::PngSequenceSource,
    traits::{EdgeDetector, FrameSource},
};

/// Builder for creating frame pipelines with a fluent API
pub struct FramePipelineBuilder {
    source: Option<Box<dyn FrameSource>>,
    detector: Option<Box<dyn EdgeDetector>>,
    remap: RemapConfig,
    rounding: RoundingMode,
    sequence: FrameSequence,
}

impl FramePipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            source: None,
            detector: None,
            remap: RemapConfig::default(),
            rounding: RoundingMode::default(),
            sequence: FrameSequence::default(),
        }
    }

    /// Start from a loaded configuration
    pub fn from_config(config: &EdgeFramesConfig) -> Self {
        Self::new()
            .with_sequence(config.frames.clone())
            .with_remap(config.remap.clone())
            .with_rounding(config.rounding)
            .set_detector(CannyEdgeDetector::from(&config.detection))
    }

    /// Set the frame source (replaces any existing one)
    pub fn set_source<S>(mut self, source: S) -> Self
    where
        S: FrameSource + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Set the edge detector (replaces any existing one)
    pub fn set_detector<D>(mut self, detector: D) -> Self
    where
        D: EdgeDetector + 'static,
    {
        self.detector = Some(Box::new(detector));
        self
    }

    pub fn with_remap(mut self, remap: RemapConfig) -> Self {
        self.remap = remap;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_sequence(mut self, sequence: FrameSequence) -> Self {
        self.sequence = sequence;
        self
    }

    /// Override only the number of frames
    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.sequence.frame_count = frame_count;
        self
    }

    /// Build the pipeline with default components if not specified.
    ///
    /// Without an explicit source, frames are read from the sequence's path template.
    pub fn build(self) -> FramePipeline {
        let source = self.source
            .unwrap_or_else(|| Box::new(PngSequenceSource::from(&self.sequence)));

        let detector = self.detector
            .unwrap_or_else(|| Box::new(CannyEdgeDetector::default()));

        FramePipeline::new(
            source,
            detector,
            CoordinateRemapper::new(self.remap, self.rounding),
            self.sequence,
        )
    }
}

impl Default for FramePipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
