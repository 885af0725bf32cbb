// SPDX-License-Identifier: MPL-2.0

//! Recording plan validation and output path derivation
//!
//! The capture demos write the color and depth streams to two video files
//! next to each other. This module holds the pure half of that flow: the
//! supported parameter sets, the `<name>_rgb.<ext>` / `<name>_depth.<ext>`
//! naming, and the viewer JSON config the sensor tooling exports. Opening
//! the device and driving the encoder stay with the camera SDK and the
//! media library.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::constants::{ALLOWED_FRAMERATES, ALLOWED_HEIGHTS, ALLOWED_WIDTHS};
use crate::errors::{AppError, RecordingError};

/// Output container format for the recorded streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerFormat {
    /// MPEG-4 container, mp4v encoding
    #[default]
    Mp4,
    /// AVI container, XVID encoding
    Avi,
}

impl ContainerFormat {
    /// Get all format variants for iteration
    pub const ALL: [ContainerFormat; 2] = [ContainerFormat::Mp4, ContainerFormat::Avi];

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ContainerFormat::Mp4 => "mp4",
            ContainerFormat::Avi => "avi",
        }
    }

    /// FourCC code handed to the video writer
    pub fn fourcc(&self) -> &'static str {
        match self {
            ContainerFormat::Mp4 => "mp4v",
            ContainerFormat::Avi => "XVID",
        }
    }

    /// Get display name for the format
    pub fn display_name(&self) -> &'static str {
        match self {
            ContainerFormat::Mp4 => "MP4",
            ContainerFormat::Avi => "AVI",
        }
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ContainerFormat {
    type Err = RecordingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp4" => Ok(ContainerFormat::Mp4),
            "avi" => Ok(ContainerFormat::Avi),
            other => Err(RecordingError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Depth sensor visual preset
///
/// Display names match the option-value descriptions the sensor reports,
/// which is how the preset is selected on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualPreset {
    Custom,
    Standard,
    Hand,
    HighAccuracy,
    /// Densest depth map (default for recording)
    #[default]
    HighDensity,
}

impl VisualPreset {
    /// Get all preset variants for iteration
    pub const ALL: [VisualPreset; 5] = [
        VisualPreset::Custom,
        VisualPreset::Standard,
        VisualPreset::Hand,
        VisualPreset::HighAccuracy,
        VisualPreset::HighDensity,
    ];

    /// Get display name for the preset, as the sensor describes it
    pub fn display_name(&self) -> &'static str {
        match self {
            VisualPreset::Custom => "Custom",
            VisualPreset::Standard => "Default",
            VisualPreset::Hand => "Hand",
            VisualPreset::HighAccuracy => "High Accuracy",
            VisualPreset::HighDensity => "High Density",
        }
    }
}

impl fmt::Display for VisualPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for VisualPreset {
    type Err = RecordingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "High Density", "high-density" and "high_density" alike
        let normalized = s.to_ascii_lowercase().replace(['-', '_'], " ");
        VisualPreset::ALL
            .into_iter()
            .find(|preset| preset.display_name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| RecordingError::UnknownPreset(s.to_string()))
    }
}

/// Depth/color stream parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Resolution width
    pub width: u32,
    /// Resolution height
    pub height: u32,
    /// Frames per second
    pub fps: u32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 30,
        }
    }
}

impl StreamConfig {
    /// Check the parameters against the sets the sensor supports
    pub fn validate(&self) -> Result<(), RecordingError> {
        if !ALLOWED_WIDTHS.contains(&self.width) {
            return Err(RecordingError::InvalidWidth(self.width));
        }
        if !ALLOWED_HEIGHTS.contains(&self.height) {
            return Err(RecordingError::InvalidHeight(self.height));
        }
        if !ALLOWED_FRAMERATES.contains(&self.fps) {
            return Err(RecordingError::InvalidFramerate(self.fps));
        }
        Ok(())
    }

    /// Load stream parameters from a viewer JSON config file
    ///
    /// The sensor tooling exports settings as a `viewer` section with
    /// string-typed values; the loaded parameters are validated before
    /// being returned.
    pub fn from_viewer_json(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        let file: ViewerConfigFile = serde_json::from_str(&text)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let config = Self {
            width: parse_viewer_value(&file.viewer.width, "stream-width")?,
            height: parse_viewer_value(&file.viewer.height, "stream-height")?,
            fps: parse_viewer_value(&file.viewer.fps, "stream-fps")?,
        };
        config.validate()?;

        debug!(?config, path = ?path, "Loaded viewer stream settings");
        Ok(config)
    }
}

impl fmt::Display for StreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ {} fps", self.width, self.height, self.fps)
    }
}

/// Parse resolution string in format "WIDTHxHEIGHT"
pub fn parse_resolution(resolution_str: &str) -> Result<(u32, u32), RecordingError> {
    let parts: Vec<&str> = resolution_str.split('x').collect();
    if parts.len() == 2 {
        if let (Ok(width), Ok(height)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
            return Ok((width, height));
        }
    }
    Err(RecordingError::InvalidResolution(
        resolution_str.to_string(),
    ))
}

#[derive(Debug, Deserialize)]
struct ViewerConfigFile {
    viewer: ViewerSection,
}

#[derive(Debug, Deserialize)]
struct ViewerSection {
    #[serde(rename = "stream-width")]
    width: String,
    #[serde(rename = "stream-height")]
    height: String,
    #[serde(rename = "stream-fps")]
    fps: String,
}

fn parse_viewer_value(value: &str, key: &str) -> Result<u32, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} is not an integer: {}", key, value)))
}

/// A validated description of one recording run
#[derive(Debug, Clone)]
pub struct RecordingPlan {
    /// Base name for the output files
    pub name: String,
    /// Output container format
    pub format: ContainerFormat,
    /// Stream parameters shared by the color and depth channels
    pub stream: StreamConfig,
    /// Depth sensor visual preset
    pub preset: VisualPreset,
}

impl RecordingPlan {
    /// File name of the color stream video, `<name>_rgb.<ext>`
    pub fn color_file_name(&self) -> String {
        format!("{}_rgb.{}", self.name, self.format.extension())
    }

    /// File name of the depth stream video, `<name>_depth.<ext>`
    pub fn depth_file_name(&self) -> String {
        format!("{}_depth.{}", self.name, self.format.extension())
    }

    /// Full path of the color stream video under `dir`
    pub fn color_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.color_file_name())
    }

    /// Full path of the depth stream video under `dir`
    pub fn depth_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.depth_file_name())
    }

    /// Check the plan against the supported parameter sets
    pub fn validate(&self) -> Result<(), RecordingError> {
        self.stream.validate()
    }
}
