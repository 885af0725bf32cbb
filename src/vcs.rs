// SPDX-License-Identifier: MPL-2.0

//! Best-effort git branch/commit lookup
//!
//! Shells out to `git`; every failure mode (no git binary, not a
//! repository, empty output) collapses into `None` so callers can degrade
//! to an informational message.

use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Branch and head commit of a local repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    /// Current branch name (or "HEAD" when detached)
    pub branch: String,
    /// Full commit hash of HEAD
    pub commit: String,
    /// Subject line of the head commit
    pub summary: String,
}

impl GitInfo {
    /// Look up branch and head commit for the repository at `repo_dir`
    pub fn lookup(repo_dir: &Path) -> Option<Self> {
        let branch = git_output(repo_dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        let commit = git_output(repo_dir, &["rev-parse", "HEAD"])?;
        let summary = git_output(repo_dir, &["log", "-1", "--pretty=%s"])?;

        Some(Self {
            branch,
            commit,
            summary,
        })
    }
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        debug!(?args, "git command failed");
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

/// Print the current branch and last commit, or a single fallback line
pub fn print_git_information(repo_dir: &Path) {
    match GitInfo::lookup(repo_dir) {
        Some(info) => {
            println!("Git info. Current branch: {}", info.branch);
            println!("Last commit: {} {}", info.commit, info.summary);
        }
        None => {
            println!(
                "Git information is not available for {}",
                repo_dir.display()
            );
        }
    }
}
