//! Archive-to-project mapping by basename equality.
//!
//! Deliberately approximate: a packaged entry is associated with every
//! project file sharing its basename. Multiple candidates are all reported
//! with a multiplicity flag, never silently disambiguated, and no size
//! comparison is attempted.

use crate::domain::models::ArchiveMapping;
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

pub fn map_entries(entry_paths: &[String], project_root: &Path) -> Vec<ArchiveMapping> {
    let index = basename_index(project_root);
    entry_paths
        .iter()
        .map(|entry| {
            let matches = basename(entry)
                .and_then(|name| index.get(name).cloned())
                .unwrap_or_default();
            ArchiveMapping {
                entry: entry.clone(),
                multiple: matches.len() > 1,
                matches,
            }
        })
        .collect()
}

/// Basename -> sorted project-relative paths, one tree walk for the whole
/// mapping pass. `.git` internals are not candidate sources.
fn basename_index(project_root: &Path) -> HashMap<String, Vec<String>> {
    let mut index: HashMap<String, Vec<String>> = HashMap::new();
    let walk = WalkDir::new(project_root)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git");
    for entry in walk.filter_map(Result::ok).filter(|e| e.file_type().is_file()) {
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let rel = entry
            .path()
            .strip_prefix(project_root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        index.entry(name.to_string()).or_default().push(rel);
    }
    for candidates in index.values_mut() {
        candidates.sort();
    }
    index
}

fn basename(entry: &str) -> Option<&str> {
    entry.rsplit('/').next().filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_with(paths: &[&str]) -> TempDir {
        let tmp = TempDir::new().expect("temp project");
        for p in paths {
            let full = tmp.path().join(p);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, b"x").unwrap();
        }
        tmp
    }

    #[test]
    fn multiple_candidates_are_all_reported() {
        let tmp = project_with(&["res/drawable/icon.png", "res/drawable-hdpi/icon.png"]);
        let maps = map_entries(&["res/icon.png".to_string()], tmp.path());
        assert_eq!(maps.len(), 1);
        assert!(maps[0].multiple);
        assert_eq!(
            maps[0].matches,
            vec![
                "res/drawable-hdpi/icon.png".to_string(),
                "res/drawable/icon.png".to_string(),
            ]
        );
    }

    #[test]
    fn unmatched_entry_is_recorded_not_dropped() {
        let tmp = project_with(&["res/drawable/icon.png"]);
        let maps = map_entries(&["classes.dex".to_string()], tmp.path());
        assert_eq!(maps.len(), 1);
        assert!(maps[0].matches.is_empty());
        assert!(!maps[0].multiple);
    }

    #[test]
    fn matches_always_share_the_entry_basename() {
        let tmp = project_with(&["a/icon.png", "b/logo.png"]);
        let maps = map_entries(&["assets/icon.png".to_string()], tmp.path());
        for m in &maps {
            for candidate in &m.matches {
                assert!(candidate.ends_with("icon.png"));
            }
        }
        assert_eq!(maps[0].matches, vec!["a/icon.png".to_string()]);
        assert!(!maps[0].multiple);
    }
}
