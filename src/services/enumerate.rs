//! File enumeration, one entry point per audit mode.
//!
//! Every entry point does its preflight up front and returns a lazy, finite,
//! consume-once sequence of `FileRecord`. Enumeration carries no reporting
//! or progress concern; callers observe the sequence themselves.

use crate::domain::errors::AuditError;
use crate::domain::models::{CommitWindow, FileRecord};
use crate::services::{archive, git, history::HistoryWalker, rules};
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Caller-supplied extension narrowing (`--types png,jpg`).
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    exts: Vec<String>,
}

impl ExtensionFilter {
    pub fn parse(raw: &str) -> Self {
        let exts = raw
            .split(',')
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { exts }
    }

    pub fn matches(&self, path: &str) -> bool {
        match rules::extension_of(path) {
            Some(ext) => self.exts.iter().any(|e| *e == ext),
            None => false,
        }
    }
}

/// Apply an optional filter; no filter keeps every path.
pub fn keep(filter: &Option<ExtensionFilter>, path: &str) -> bool {
    filter.as_ref().map_or(true, |f| f.matches(path))
}

/// Working-tree snapshot: packageable files under `repo`, restricted
/// further by `filter` when given.
pub fn snapshot(
    repo: &Path,
    filter: Option<ExtensionFilter>,
) -> anyhow::Result<impl Iterator<Item = FileRecord>> {
    git::ensure_repo(repo)?;
    let root = repo.to_path_buf();
    let walk = WalkDir::new(repo)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git");
    Ok(walk
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(move |entry| {
            let rel = entry
                .path()
                .strip_prefix(&root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            let ext = rules::extension_of(&rel)?;
            if !rules::is_packageable(&ext) || !keep(&filter, &rel) {
                return None;
            }
            let size = entry.metadata().ok().map(|m| m.len());
            Some(FileRecord {
                source: "HEAD".to_string(),
                path: rel,
                size,
                commit_date: None,
                commit_title: None,
            })
        }))
}

/// Commit-range audit: requires both window dates; one record per
/// (commit, changed file) pair in commit-chronological order.
pub fn commit_range(repo: &Path, window: &CommitWindow) -> anyhow::Result<HistoryWalker> {
    if window.start.is_none() || window.end.is_none() {
        return Err(AuditError::UnsupportedMode(
            "commit-range audit requires both --start-date and --end-date".to_string(),
        )
        .into());
    }
    HistoryWalker::open(repo, window)
}

/// All-history audit: unbounded walk deduplicated to one record per path,
/// keeping the size from the chronologically latest commit touching it.
pub fn all_history(repo: &Path, branch: Option<String>) -> anyhow::Result<Vec<FileRecord>> {
    let window = CommitWindow::new(None, None, branch)?;
    let walker = HistoryWalker::open(repo, &window)?;

    let mut order: Vec<String> = Vec::new();
    let mut latest: HashMap<String, FileRecord> = HashMap::new();
    // Walker yields oldest to newest, so a straight overwrite leaves the
    // last-touching commit's record in place.
    for record in walker.records() {
        if !latest.contains_key(&record.path) {
            order.push(record.path.clone());
        }
        latest.insert(record.path.clone(), record);
    }
    Ok(order
        .into_iter()
        .filter_map(|path| latest.remove(&path))
        .collect())
}

/// Package-archive audit: entry list wrapped into records with the archive
/// path as source identifier.
pub fn archive(archive_path: &Path) -> anyhow::Result<Vec<FileRecord>> {
    let entries = archive::read_entries(archive_path)?;
    let source = archive_path.display().to_string();
    Ok(entries
        .into_iter()
        .map(|(path, size)| FileRecord {
            source: source.clone(),
            path,
            size: Some(size),
            commit_date: None,
            commit_title: None,
        })
        .collect())
}
