//! # Edge Frames
//!
//! Turns a rendered animation into point data for an X-Y vector display.
//!
//! Each frame of an image sequence goes through Canny edge detection, and
//! every edge pixel is remapped from the image raster onto the display's
//! coordinate space (rescaled, flipped vertically and offset). The resulting
//! listing can then be ordered into drawable paths and exported as a C header
//! for the firmware.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edge_frames::{FramePipeline, ListingWriter};
//!
//! // 512 frames from frames/frame1.png, frames/frame3.png, ...
//! let pipeline = FramePipeline::builder().build();
//!
//! let mut sink = ListingWriter::new(std::io::stdout().lock());
//! let summary = pipeline.run(&mut sink)?;
//! eprintln!("{} frames, {} points", summary.frames, summary.points);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Header export
//!
//! ```rust,no_run
//! use edge_frames::{parse_listing, HeaderWriter, NearestNeighborSequencer, PointSequencer};
//!
//! let listing = std::fs::read_to_string("edges.txt")?;
//! let sequencer = NearestNeighborSequencer::default();
//! let frames: Vec<_> = parse_listing(&listing)?
//!     .iter()
//!     .map(|points| sequencer.sequence(points))
//!     .collect();
//!
//! HeaderWriter::default().write(&mut std::io::stdout(), &frames)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod config;
pub mod algorithms;
pub mod remap;
pub mod source;
pub mod pipeline;
pub mod io;

// Re-exports for convenience
pub use error::{EdgeFramesError, Result};
pub use types::{EdgeMask, FrameCoordinates, FrameSlot, PointList, RunSummary, XyPoint};
pub use traits::*;
pub use config::{CannySettings, EdgeFramesConfig, FrameSequence, HeaderConfig, RemapConfig, RoundingMode};
pub use algorithms::*;
pub use remap::CoordinateRemapper;
pub use source::PngSequenceSource;
pub use pipeline::{FramePipeline, builder::FramePipelineBuilder};
pub use io::*;
