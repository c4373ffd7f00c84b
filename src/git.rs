//! # Git Operations
//!
//! Registries and service sources are plain Git checkouts managed under the
//! tb root. All Git work goes through the `GitOperations` trait so the engine
//! and registry sync can be tested without a network or a `git` binary.
//!
//! `SystemGit` shells out to the system `git`, which picks up SSH keys,
//! credential helpers and anything else configured in `~/.gitconfig`.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clone the GitHub repository `<org>/<repo>` into `target_dir`.
    fn clone_repo(&self, repo: &str, target_dir: &Path) -> Result<()>;

    /// Fast-forward the checkout at `dir` from its remote.
    fn pull(&self, dir: &Path) -> Result<()>;
}

/// `GitOperations` backed by the system `git` command.
#[derive(Debug, Clone, Default)]
pub struct SystemGit;

/// SSH clone URL for a GitHub `<org>/<repo>`.
pub fn github_url(repo: &str) -> String {
    format!("git@github.com:{}.git", repo)
}

fn clone_failure_message(stderr: &str) -> String {
    if stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository")
    {
        format!(
            "Authentication failed. Make sure you have access to the repository.\n\
            Ensure your SSH key is added to ssh-agent and registered with GitHub.\n\
            Error: {}",
            stderr.trim()
        )
    } else {
        stderr.trim().to_string()
    }
}

impl GitOperations for SystemGit {
    fn clone_repo(&self, repo: &str, target_dir: &Path) -> Result<()> {
        let url = github_url(repo);

        // git won't clone into an existing non-empty dir
        if target_dir.exists() {
            fs::remove_dir_all(target_dir)?;
        }
        if let Some(parent) = target_dir.parent() {
            fs::create_dir_all(parent)?;
        }

        log::debug!("cloning {} into {}", url, target_dir.display());
        let output = Command::new("git")
            .args(["clone", "--quiet", &url])
            .arg(target_dir)
            .output()
            .map_err(|e| Error::GitClone {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::GitClone {
                url,
                message: clone_failure_message(&stderr),
            });
        }
        Ok(())
    }

    fn pull(&self, dir: &Path) -> Result<()> {
        log::debug!("pulling {}", dir.display());
        let output = Command::new("git")
            .args(["pull", "--quiet", "--ff-only"])
            .current_dir(dir)
            .output()
            .map_err(|e| Error::GitCommand {
                command: "pull".to_string(),
                dir: dir.display().to_string(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::GitCommand {
                command: "pull".to_string(),
                dir: dir.display().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
