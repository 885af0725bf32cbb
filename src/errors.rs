// SPDX-License-Identifier: MPL-2.0

//! Error types for the capture utilities

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Recording plan errors
    Recording(RecordingError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Recording plan errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingError {
    /// Container format not supported
    UnsupportedFormat(String),
    /// Visual preset name not recognized
    UnknownPreset(String),
    /// Stream width outside the supported set
    InvalidWidth(u32),
    /// Stream height outside the supported set
    InvalidHeight(u32),
    /// Framerate outside the supported set
    InvalidFramerate(u32),
    /// Resolution string could not be parsed
    InvalidResolution(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Recording(e) => write!(f, "Recording error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for RecordingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingError::UnsupportedFormat(name) => {
                write!(f, "Unsupported container format: {}", name)
            }
            RecordingError::UnknownPreset(name) => {
                write!(f, "Unknown visual preset: {}", name)
            }
            RecordingError::InvalidWidth(width) => {
                write!(f, "Unsupported stream width: {}", width)
            }
            RecordingError::InvalidHeight(height) => {
                write!(f, "Unsupported stream height: {}", height)
            }
            RecordingError::InvalidFramerate(fps) => {
                write!(f, "Unsupported framerate: {}", fps)
            }
            RecordingError::InvalidResolution(text) => {
                write!(f, "Invalid resolution (expected WIDTHxHEIGHT): {}", text)
            }
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for RecordingError {}

impl From<RecordingError> for AppError {
    fn from(err: RecordingError) -> Self {
        AppError::Recording(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
