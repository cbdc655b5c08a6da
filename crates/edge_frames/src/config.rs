//! Run configuration.
//!
//! Every field defaults to the values the animation tool chain was built
//! around, so an empty config file (or none at all) reproduces the standard
//! 512-frame run.

use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::error::{EdgeFramesError, Result};
use crate::types::FrameSlot;

/// Placeholder substituted with the 1-based frame number in path templates
pub const FRAME_NUMBER_PLACEHOLDER: &str = "{}";

/// Which frames to read and where to find them
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct FrameSequence {
    /// Number of frames written to the listing
    pub frame_count: usize,
    /// Step between consumed source frames (2 halves the frame rate)
    #[schemars(range(min = 1))]
    pub stride: usize,
    /// Path of each frame, `{}` is replaced by the 1-based frame number
    pub path_template: String,
}

impl Default for FrameSequence {
    fn default() -> Self {
        Self {
            frame_count: 512,
            stride: 2,
            path_template: "frames/frame{}.png".to_string(),
        }
    }
}

impl FrameSequence {
    /// Slots in processing order
    pub fn slots(&self) -> impl Iterator<Item = FrameSlot> + '_ {
        (0..self.frame_count).map(move |ordinal| FrameSlot {
            ordinal,
            source_index: ordinal * self.stride,
        })
    }
}

/// Canny hysteresis thresholds
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct CannySettings {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for CannySettings {
    fn default() -> Self {
        Self {
            low_threshold: 100.0,
            high_threshold: 255.0,
        }
    }
}

/// Input raster and output display geometry
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct RemapConfig {
    pub in_width: u32,
    pub in_height: u32,
    pub out_width: u32,
    pub out_height: u32,
    /// Added to every output y after the flip
    pub out_y_offset: i32,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            in_width: 480,
            in_height: 360,
            out_width: 256,
            out_height: 192,
            out_y_offset: 32,
        }
    }
}

/// Rounding applied to remapped coordinates.
///
/// `HalfToEven` reproduces the frame data already shipped with the firmware.
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, VariantNames,
    PartialEq, Eq
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoundingMode {
    /// 0.5 -> 0, 1.5 -> 2, 2.5 -> 2
    #[default]
    HalfToEven,
    /// 0.5 -> 1, 1.5 -> 2, 2.5 -> 3
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfToEven => value.round_ties_even(),
            Self::HalfAwayFromZero => value.round(),
        }
    }
}

/// Settings for the C header stage
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct HeaderConfig {
    /// Keep every n-th point of the traversal path
    #[schemars(range(min = 1))]
    pub cull_modulus: usize,
    pub points_per_line: usize,
    /// Include guard macro
    pub guard: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            cull_modulus: 12,
            points_per_line: 8,
            guard: "MODELS_H".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct EdgeFramesConfig {
    pub rounding: RoundingMode,
    pub frames: FrameSequence,
    pub detection: CannySettings,
    pub remap: RemapConfig,
    pub header: HeaderConfig,
}

impl EdgeFramesConfig {
    /// JSON schema of the config file
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(EdgeFramesConfig)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?),
            Some("json") => Self::from_json(&fs::read_to_string(path)?),
            _ => Err(EdgeFramesError::UnsupportedConfigFormat),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save by extension, `.toml` or `.json`
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => self.to_toml()?,
            Some("json") => self.to_json()?,
            _ => return Err(EdgeFramesError::UnsupportedConfigFormat),
        };
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(EdgeFramesError::InvalidConfig(msg.to_string()));

        if self.frames.stride == 0 {
            return invalid("frames.stride must be at least 1");
        }
        let last_file_number = self.frames.frame_count
            .saturating_sub(1)
            .checked_mul(self.frames.stride)
            .and_then(|index| index.checked_add(1));
        if last_file_number.is_none() {
            return invalid("frames.frame_count * frames.stride overflows the frame index");
        }
        if !self.frames.path_template.contains(FRAME_NUMBER_PLACEHOLDER) {
            return invalid("frames.path_template must contain `{}`");
        }
        if self.remap.in_width == 0 || self.remap.in_height == 0 {
            return invalid("remap input dimensions must be non-zero");
        }
        if self.remap.out_width == 0 || self.remap.out_height == 0 {
            return invalid("remap output dimensions must be non-zero");
        }
        let canny = &self.detection;
        if !(canny.low_threshold >= 0.0 && canny.low_threshold <= canny.high_threshold) {
            return invalid("detection thresholds must satisfy 0 <= low <= high");
        }
        if self.header.cull_modulus == 0 {
            return invalid("header.cull_modulus must be at least 1");
        }
        if self.header.points_per_line == 0 {
            return invalid("header.points_per_line must be at least 1");
        }
        if self.header.guard.trim().is_empty() {
            return invalid("header.guard must not be empty");
        }
        Ok(())
    }
}
