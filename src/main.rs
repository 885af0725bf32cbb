// SPDX-License-Identifier: GPL-3.0-only

use capturekit::constants::BitratePreset;
use capturekit::recording::{ContainerFormat, VisualPreset};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "capturekit")]
#[command(about = "Run instrumentation and recording planning for RGB-D capture demos")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the instrumented demo entry point
    Run {
        /// Seed for the process-wide RNG
        #[arg(short, long, default_value_t = 12345)]
        seed: u64,

        /// Skip the git context report
        #[arg(long)]
        no_git: bool,

        /// Request deterministic accelerator execution
        #[arg(long)]
        deterministic_accel: bool,
    },

    /// Validate a recording plan and print the derived outputs
    Plan {
        /// Base name for the output files
        #[arg(short, long, default_value = "record")]
        name: String,

        /// Container format (mp4 or avi)
        #[arg(short, long, default_value = "mp4")]
        format: ContainerFormat,

        /// Resolution as WIDTHxHEIGHT (overrides --width/--height)
        #[arg(short, long)]
        resolution: Option<String>,

        /// Stream width
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Stream height
        #[arg(long, default_value_t = 720)]
        height: u32,

        /// Frames per second
        #[arg(long, default_value_t = 30)]
        fps: u32,

        /// Depth sensor visual preset
        #[arg(short, long, default_value = "High Density")]
        preset: VisualPreset,

        /// Viewer JSON config with stream settings (overrides resolution flags)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Planned duration in seconds (enables a size estimate)
        #[arg(short, long)]
        duration: Option<u64>,

        /// Bitrate preset for the size estimate
        #[arg(short, long, default_value = "medium")]
        bitrate: BitratePreset,

        /// Directory for the output files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=capturekit=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seed,
            no_git,
            deterministic_accel,
        } => cli::run_demo(seed, !no_git, deterministic_accel),
        Commands::Plan {
            name,
            format,
            resolution,
            width,
            height,
            fps,
            preset,
            config,
            duration,
            bitrate,
            output_dir,
        } => cli::plan_recording(cli::PlanOptions {
            name,
            format,
            resolution,
            width,
            height,
            fps,
            preset,
            config,
            duration,
            bitrate,
            output_dir,
        }),
    }
}
