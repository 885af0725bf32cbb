// SPDX-License-Identifier: MPL-2.0

//! capturekit - run instrumentation and recording-plan utilities
//!
//! This library backs the small capture demo programs: a timed, logged,
//! reproducible entry-point wrapper plus the pure validation and path
//! derivation logic around depth/color recordings.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`runner`]: timed entry-point wrapper and per-call timer
//! - [`rng`]: process-wide deterministic seeding
//! - [`vcs`]: best-effort git branch/commit lookup
//! - [`recording`]: recording plan validation and output path derivation
//! - [`constants`]: stream parameter sets and bitrate presets
//! - [`units`]: human-readable time and byte formatting
//! - [`math`]: power-of-two helpers
//! - [`errors`]: unified error types

pub mod constants;
pub mod errors;
pub mod math;
pub mod recording;
pub mod rng;
pub mod runner;
pub mod units;
pub mod utils;
pub mod vcs;

// Re-export commonly used types
pub use errors::{AppError, AppResult, RecordingError};
pub use recording::{ContainerFormat, RecordingPlan, StreamConfig, VisualPreset};
