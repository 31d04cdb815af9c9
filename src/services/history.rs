//! Commit-level history traversal.
//!
//! `HistoryWalker::open` performs all preflight (repo check, optional
//! guarded checkout, commit listing, window filtering, changed-path
//! resolution) so that every terminal error surfaces before the first
//! record is produced. Only per-path blob sizing remains lazy, and a blob
//! that cannot be sized degrades to `size: None` instead of aborting the
//! walk.

use crate::domain::models::{CommitInfo, CommitWindow, FileRecord};
use crate::services::git;
use std::path::{Path, PathBuf};

pub struct HistoryWalker {
    repo: PathBuf,
    commits: Vec<(CommitInfo, Vec<String>)>,
}

impl HistoryWalker {
    pub fn open(repo: &Path, window: &CommitWindow) -> anyhow::Result<Self> {
        git::ensure_repo(repo)?;
        if let Some(branch) = &window.branch {
            git::checkout_branch(repo, branch)?;
        }
        let mut commits = git::log_commits(repo)?;
        // Inclusive date filtering happens here, not via git's --since/
        // --until, so boundary days behave identically on every git version.
        commits.retain(|c| window.contains(c.date));
        // Changed paths are resolved eagerly: a diff that cannot be read
        // fails the whole run here rather than shrinking it mid-iteration.
        let commits = commits
            .into_iter()
            .map(|commit| {
                let paths = git::changed_paths(repo, &commit.sha)?;
                Ok((commit, paths))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            repo: repo.to_path_buf(),
            commits,
        })
    }

    /// One record per (commit, changed path), commits oldest to newest and
    /// paths in diff order within a commit. Sizes are resolved as the
    /// iterator advances.
    pub fn records(self) -> impl Iterator<Item = FileRecord> {
        let repo = self.repo;
        self.commits.into_iter().flat_map(move |(commit, paths)| {
            let repo = repo.clone();
            paths.into_iter().map(move |path| FileRecord {
                size: git::blob_size(&repo, &commit.sha, &path),
                source: commit.sha.clone(),
                path,
                commit_date: Some(commit.date),
                commit_title: Some(commit.title.clone()),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(repo: &Path, args: &[&str]) {
        let status = Command::new("git")
            .arg("-C")
            .arg(repo)
            .args(args)
            .env("GIT_AUTHOR_DATE", "2024-05-01T12:00:00 +0000")
            .env("GIT_COMMITTER_DATE", "2024-05-01T12:00:00 +0000")
            .status()
            .expect("run git");
        assert!(status.success(), "git {args:?} failed");
    }

    fn fixture_repo() -> TempDir {
        let tmp = TempDir::new().expect("temp repo");
        git(tmp.path(), &["init", "-q"]);
        git(tmp.path(), &["config", "user.email", "audit@example.com"]);
        git(tmp.path(), &["config", "user.name", "Audit Fixture"]);
        fs::write(tmp.path().join("icon.png"), vec![b'a'; 128]).expect("write icon");
        fs::write(tmp.path().join("logo.webp"), vec![b'a'; 256]).expect("write logo");
        git(tmp.path(), &["add", "-A"]);
        git(tmp.path(), &["commit", "-q", "-m", "add assets"]);
        tmp
    }

    #[test]
    fn changed_paths_are_resolved_before_iteration() {
        let tmp = fixture_repo();
        let walker =
            HistoryWalker::open(tmp.path(), &CommitWindow::default()).expect("open walker");
        // A broken object store after preflight must not shrink the walk;
        // every changed path still appears, only sizing degrades.
        fs::remove_dir_all(tmp.path().join(".git/objects")).expect("corrupt object store");
        let records: Vec<FileRecord> = walker.records().collect();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.size.is_none()));
    }

    #[test]
    fn unreadable_history_fails_the_run_outright() {
        let tmp = fixture_repo();
        fs::remove_dir_all(tmp.path().join(".git/objects")).expect("corrupt object store");
        assert!(HistoryWalker::open(tmp.path(), &CommitWindow::default()).is_err());
    }
}
