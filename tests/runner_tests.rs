// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the timed entry-point wrapper

use capturekit::runner::{TimedMainOptions, timed, timed_main};
use capturekit::vcs::GitInfo;

#[test]
fn test_timed_main_returns_body_value() {
    let options = TimedMainOptions {
        report_git: false,
        ..Default::default()
    };

    let value = timed_main(&options, || vec![1, 2, 3]);
    assert_eq!(value, vec![1, 2, 3]);
}

#[test]
fn test_timed_main_with_git_report_still_returns() {
    // The git lookup is best-effort; whether or not this test runs inside
    // a repository, the wrapper must hand the value back unchanged.
    let options = TimedMainOptions::default();
    let value = timed_main(&options, || "done");
    assert_eq!(value, "done");
}

#[test]
fn test_timed_returns_call_value() {
    let value = timed("sum", || (1..=10).sum::<u32>());
    assert_eq!(value, 55);
}

#[test]
fn test_git_lookup_outside_repository_is_none() {
    let dir = std::env::temp_dir().join(format!("capturekit-no-repo-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    assert_eq!(GitInfo::lookup(&dir), None);

    std::fs::remove_dir_all(&dir).unwrap();
}
