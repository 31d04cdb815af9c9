use crate::domain::errors::AuditError;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Best-practice size-budget buckets for Android assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileCategory {
    VectorIcon,
    RasterIcon,
    ContentImage,
    FullscreenImage,
    AudioEffect,
    AudioMusic,
    Video,
    LottieAnimation,
    NativeLibrary,
    DexCode,
    JsonData,
    Font,
    ResourceXml,
    Unclassified,
}

impl FileCategory {
    pub fn label(self) -> &'static str {
        match self {
            FileCategory::VectorIcon => "Vector Icon",
            FileCategory::RasterIcon => "Raster Icon",
            FileCategory::ContentImage => "Content Image",
            FileCategory::FullscreenImage => "Fullscreen Image",
            FileCategory::AudioEffect => "Audio Effect",
            FileCategory::AudioMusic => "Audio Music",
            FileCategory::Video => "Video",
            FileCategory::LottieAnimation => "Lottie Animation",
            FileCategory::NativeLibrary => "Native Library",
            FileCategory::DexCode => "DEX/Code",
            FileCategory::JsonData => "JSON/Data",
            FileCategory::Font => "Font",
            FileCategory::ResourceXml => "Resource XML",
            FileCategory::Unclassified => "Unclassified",
        }
    }
}

/// One row of the size-budget table. Resolution is first-match-wins over
/// the declared order, so rules live in an ordered slice, never a map.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub category: FileCategory,
    pub extensions: &'static [&'static str],
    pub max_bytes: u64,
    pub note: &'static str,
}

/// A single enumerated file, before classification.
///
/// `source` is a commit hash, `HEAD` for working-tree snapshots, or the
/// archive path for packaged entries. `size: None` means the blob could
/// not be sized; such records still flow through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub source: String,
    pub path: String,
    pub size: Option<u64>,
    pub commit_date: Option<NaiveDate>,
    pub commit_title: Option<String>,
}

/// Classification verdict for one record. Computed on demand, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    #[serde(flatten)]
    pub record: FileRecord,
    pub category: FileCategory,
    pub oversize: bool,
    pub note: &'static str,
}

/// Commit metadata as reported by `git log` (first line of the message only).
#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub sha: String,
    pub date: NaiveDate,
    pub title: String,
}

/// Inclusive date window bounding a history walk, plus an optional branch
/// to check out first. Unbounded on either side when a date is `None`.
#[derive(Debug, Clone, Default)]
pub struct CommitWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub branch: Option<String>,
}

impl CommitWindow {
    pub fn new(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        branch: Option<String>,
    ) -> Result<Self, AuditError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(AuditError::InvalidRange(format!(
                    "start date {s} is after end date {e}"
                )));
            }
        }
        Ok(Self { start, end, branch })
    }

    /// Parse ISO 8601 (`YYYY-MM-DD`) bounds from CLI strings.
    pub fn parse(
        start: Option<&str>,
        end: Option<&str>,
        branch: Option<String>,
    ) -> Result<Self, AuditError> {
        let start = start.map(parse_date).transpose()?;
        let end = end.map(parse_date).transpose()?;
        Self::new(start, end, branch)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.start {
            if date < s {
                return false;
            }
        }
        if let Some(e) = self.end {
            if date > e {
                return false;
            }
        }
        true
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AuditError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AuditError::InvalidRange(format!("malformed date: {raw} (expected YYYY-MM-DD)"))
    })
}

/// Best-guess association between a packaged entry and project sources,
/// by basename equality only.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveMapping {
    pub entry: String,
    /// All project paths whose basename matches; empty when unmatched.
    pub matches: Vec<String>,
    pub multiple: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn window_rejects_inverted_range() {
        let err = CommitWindow::parse(Some("2024-06-01"), Some("2024-05-01"), None).unwrap_err();
        assert!(matches!(err, AuditError::InvalidRange(_)));
    }

    #[test]
    fn window_rejects_malformed_date() {
        let err = CommitWindow::parse(Some("01/05/2024"), None, None).unwrap_err();
        assert!(matches!(err, AuditError::InvalidRange(_)));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let w = CommitWindow::parse(Some("2024-05-01"), Some("2024-06-01"), None).unwrap();
        assert!(w.contains(d("2024-05-01")));
        assert!(w.contains(d("2024-05-15")));
        assert!(w.contains(d("2024-06-01")));
        assert!(!w.contains(d("2024-04-30")));
        assert!(!w.contains(d("2024-06-02")));
    }

    #[test]
    fn unbounded_window_contains_everything() {
        let w = CommitWindow::default();
        assert!(w.contains(d("1970-01-01")));
        assert!(w.contains(d("2099-12-31")));
    }
}
