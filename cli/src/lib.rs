use std::io::Write;
use std::path::Path;

use edge_frames::{
    parse_listing, EdgeFramesConfig, EdgeFramesError, FramePipelineBuilder, HeaderConfig,
    HeaderWriter, ListingWriter, NearestNeighborSequencer, PointSequencer, RunSummary,
};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum XyFramesError {
    #[error(transparent)]
    EdgeFrames(#[from] EdgeFramesError),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, XyFramesError>;

/// Totals reported by the header stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderSummary {
    pub frames: usize,
    pub input_points: usize,
    pub output_points: usize,
}

/// Load and validate a config file, or fall back to the defaults
pub fn load_config(path: Option<&Path>) -> Result<EdgeFramesConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            EdgeFramesConfig::from_file(path)?
        }
        None => EdgeFramesConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Run edge extraction over the configured frames, writing the listing to `out`
pub fn run_extract<W: Write>(config: &EdgeFramesConfig, out: W) -> Result<RunSummary> {
    let pipeline = FramePipelineBuilder::from_config(config).build();
    info!("{}", pipeline.info());

    let mut sink = ListingWriter::new(out);
    Ok(pipeline.run(&mut sink)?)
}

/// Order, cull and export a listing as a C header
pub fn run_header<W: Write>(listing: &str, config: &HeaderConfig, out: &mut W) -> Result<HeaderSummary> {
    let frames = parse_listing(listing)?;
    let sequencer = NearestNeighborSequencer::new(config.cull_modulus);

    let mut summary = HeaderSummary {
        frames: frames.len(),
        ..HeaderSummary::default()
    };
    let paths: Vec<_> = frames
        .iter()
        .map(|points| {
            let path = sequencer.sequence(points);
            summary.input_points += points.len();
            summary.output_points += path.len();
            path
        })
        .collect();

    HeaderWriter::from(config).write(out, &paths)?;
    out.flush()?;

    info!(
        "Wrote {} frames, {} of {} points kept (1 in {})",
        summary.frames, summary.output_points, summary.input_points, config.cull_modulus
    );
    Ok(summary)
}

/// JSON schema of the config file, pretty-printed
pub fn config_schema() -> Result<String> {
    Ok(serde_json::to_string_pretty(&EdgeFramesConfig::schema())?)
}
