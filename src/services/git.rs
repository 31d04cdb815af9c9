//! Thin wrapper over the `git` command line. No decision logic lives here;
//! callers own ordering, filtering, and window semantics.

use crate::domain::errors::AuditError;
use crate::domain::models::CommitInfo;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use std::path::Path;
use std::process::Command;

fn run(repo: &Path, args: &[&str]) -> anyhow::Result<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .output()
        .with_context(|| format!("failed to invoke git {}", args.join(" ")))?;
    if !out.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&out.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Repository preflight shared by every repo-backed mode.
pub fn ensure_repo(repo: &Path) -> Result<(), AuditError> {
    if !repo.is_dir() || !repo.join(".git").exists() {
        return Err(AuditError::NotFound(repo.display().to_string()));
    }
    Ok(())
}

pub fn current_branch(repo: &Path) -> anyhow::Result<String> {
    Ok(run(repo, &["rev-parse", "--abbrev-ref", "HEAD"])?
        .trim()
        .to_string())
}

pub fn has_uncommitted_changes(repo: &Path) -> anyhow::Result<bool> {
    Ok(!run(repo, &["status", "--porcelain"])?.trim().is_empty())
}

/// Check out `branch`, refusing to touch a dirty working tree. Both the
/// dirty-tree case and a missing branch are caller preconditions, never
/// retried.
pub fn checkout_branch(repo: &Path, branch: &str) -> Result<(), AuditError> {
    match has_uncommitted_changes(repo) {
        Ok(true) => {
            return Err(AuditError::BranchCheckout(format!(
                "working tree at {} has uncommitted changes; commit or stash first",
                repo.display()
            )))
        }
        Ok(false) => {}
        Err(e) => return Err(AuditError::BranchCheckout(e.to_string())),
    }
    run(repo, &["checkout", branch])
        .map(|_| ())
        .map_err(|e| AuditError::BranchCheckout(format!("{branch}: {e}")))
}

/// All commits reachable from HEAD, oldest first. Lines that do not parse
/// as `sha|YYYY-MM-DD|title` are dropped rather than failing the run.
pub fn log_commits(repo: &Path) -> anyhow::Result<Vec<CommitInfo>> {
    let raw = run(
        repo,
        &[
            "log",
            "--reverse",
            "--pretty=format:%H|%ad|%s",
            "--date=short",
        ],
    )?;
    let mut commits = Vec::new();
    for line in raw.lines() {
        let mut parts = line.splitn(3, '|');
        let (Some(sha), Some(date)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
            continue;
        };
        commits.push(CommitInfo {
            sha: sha.trim().to_string(),
            date,
            title: parts.next().unwrap_or("").trim().to_string(),
        });
    }
    Ok(commits)
}

/// Paths touched by `sha` relative to its parent, in diff order.
pub fn changed_paths(repo: &Path, sha: &str) -> anyhow::Result<Vec<String>> {
    let raw = run(
        repo,
        &["diff-tree", "--no-commit-id", "--name-only", "-r", "--root", sha],
    )?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Byte size of `path`'s blob as of `sha` via `git ls-tree -l` (fourth
/// column). `None` when the blob cannot be sized (deleted path, submodule,
/// unparsable output); the walk continues with an unknown size.
pub fn blob_size(repo: &Path, sha: &str, path: &str) -> Option<u64> {
    let raw = run(repo, &["ls-tree", "-l", sha, "--", path]).ok()?;
    let line = raw.lines().next()?;
    line.split_whitespace().nth(3)?.parse::<u64>().ok()
}
