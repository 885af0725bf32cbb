// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands
//!
//! This module provides command-line functionality for:
//! - Running the instrumented, seeded demo entry point
//! - Validating a recording plan and printing the derived outputs

use capturekit::constants::BitratePreset;
use capturekit::recording::{
    ContainerFormat, RecordingPlan, StreamConfig, VisualPreset, parse_resolution,
};
use capturekit::rng;
use capturekit::runner::{self, TimedMainOptions};
use capturekit::units::{formatted_bytes, formatted_time};
use capturekit::utils::ensure_dir;
use std::path::PathBuf;

/// Run the demo entry point under the timed wrapper
pub fn run_demo(
    seed: u64,
    report_git: bool,
    deterministic_accel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = TimedMainOptions {
        report_git,
        ..Default::default()
    };

    runner::timed_main(&options, || {
        // Seed before any draw so repeated runs reproduce
        rng::set_seed(seed, deterministic_accel);

        println!("Hello world!");
        let draws: Vec<u64> = (0..5).map(|_| rng::random_range(0..100)).collect();
        println!("Sample draws: {:?}", draws);
    });

    Ok(())
}

/// Arguments for the `plan` command
pub struct PlanOptions {
    pub name: String,
    pub format: ContainerFormat,
    pub resolution: Option<String>,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub preset: VisualPreset,
    pub config: Option<PathBuf>,
    pub duration: Option<u64>,
    pub bitrate: BitratePreset,
    pub output_dir: Option<PathBuf>,
}

/// Validate a recording plan and print the derived outputs
pub fn plan_recording(options: PlanOptions) -> Result<(), Box<dyn std::error::Error>> {
    let stream = if let Some(path) = options.config.as_ref() {
        let stream = StreamConfig::from_viewer_json(path)?;
        println!("Loaded stream settings from {}", path.display());
        stream
    } else {
        let (width, height) = match options.resolution.as_deref() {
            Some(text) => parse_resolution(text)?,
            None => (options.width, options.height),
        };
        StreamConfig {
            width,
            height,
            fps: options.fps,
        }
    };
    stream.validate()?;

    let plan = RecordingPlan {
        name: options.name,
        format: options.format,
        stream,
        preset: options.preset,
    };

    let output_dir = options.output_dir.unwrap_or_else(default_output_dir);
    ensure_dir(&output_dir)?;

    println!("Recording plan:");
    println!("  Stream:        {}", plan.stream);
    println!("  Visual preset: {}", plan.preset);
    println!(
        "  Container:     {} (fourcc {})",
        plan.format.display_name(),
        plan.format.fourcc()
    );
    println!("  Color output:  {}", plan.color_path(&output_dir).display());
    println!("  Depth output:  {}", plan.depth_path(&output_dir).display());

    if let Some(seconds) = options.duration {
        // Color and depth are written as two separate files
        let estimate = plan_size_estimate(&plan, options.bitrate, seconds);
        println!(
            "  Estimated size for {}: {}",
            formatted_time(seconds as f64),
            formatted_bytes(estimate)
        );
    }

    Ok(())
}

fn plan_size_estimate(plan: &RecordingPlan, bitrate: BitratePreset, seconds: u64) -> u64 {
    bitrate.estimated_size(plan.stream.width, seconds, 2)
}

fn default_output_dir() -> PathBuf {
    dirs::video_dir()
        .map(|dir| dir.join("capturekit"))
        .unwrap_or_else(|| PathBuf::from("."))
}
