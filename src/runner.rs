// SPDX-License-Identifier: MPL-2.0

//! Timed entry-point wrapper and per-call timer
//!
//! The Rust rendering of a decorator: higher-order functions that take the
//! program body as a closure, print start/finish lines around it, and pass
//! the return value through unchanged.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;

use crate::units::formatted_time;
use crate::vcs;

/// Date format used for the start/finish lines, e.g. "29 August 2026 at 14:05"
const STAMP_FORMAT: &str = "%-d %B %Y at %H:%M";

/// Options for [`timed_main`]
#[derive(Debug, Clone)]
pub struct TimedMainOptions {
    /// Report git branch/commit after the start line
    pub report_git: bool,
    /// Repository directory for the git lookup
    pub repo_dir: PathBuf,
}

impl Default for TimedMainOptions {
    fn default() -> Self {
        Self {
            report_git: true,
            repo_dir: PathBuf::from("."),
        }
    }
}

/// Run a program body with start/finish lines and elapsed-time reporting
///
/// Prints a "Program started" line, optionally the git context (failures
/// degrade to one informational line), runs `body`, then prints a
/// "Program finished" line with the elapsed time. The body's return value
/// is passed through unchanged. A panic in the body propagates and skips
/// the finish line.
pub fn timed_main<T>(options: &TimedMainOptions, body: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    println!("Program started {}", Local::now().format(STAMP_FORMAT));
    if options.report_git {
        vcs::print_git_information(&options.repo_dir);
    }

    let result = body();

    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "\nProgram finished {}. Elapsed time: {}",
        Local::now().format(STAMP_FORMAT),
        formatted_time(elapsed)
    );
    result
}

/// Time a single call, printing its name and duration in milliseconds
pub fn timed<T>(name: &str, call: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = call();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    println!("Function {} time: {:.1} ms\n", name, elapsed_ms);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_main_passes_value_through() {
        let options = TimedMainOptions {
            report_git: false,
            ..Default::default()
        };
        let value = timed_main(&options, || 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_timed_passes_value_through() {
        let value = timed("answer", || "ok");
        assert_eq!(value, "ok");
    }
}
