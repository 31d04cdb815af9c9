//! Report assembly and rendering.
//!
//! The pipeline guarantees every row arrives with category and oversize
//! already resolved, so this layer only shapes and prints. Sheets mirror
//! the spreadsheet the audit historically produced: Info first, then the
//! mode-dependent record sheet, optimization candidates, archive sheets
//! (archive mode only), and the rule table.

use crate::domain::models::{ArchiveMapping, FileCategory, ValidationResult};
use crate::services::{output, rules};
use bytesize::ByteSize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub mode: String,
    pub target: String,
    pub branch: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub source: String,
    pub date: Option<String>,
    pub title: Option<String>,
    pub file: String,
    pub size_bytes: Option<u64>,
    pub size_human: String,
    pub category: &'static str,
    pub oversize: bool,
    pub non_standard: bool,
    pub note: &'static str,
}

#[derive(Serialize)]
pub struct RuleRow {
    pub category: &'static str,
    pub extensions: String,
    pub max_bytes: u64,
    pub max_human: String,
    pub note: &'static str,
}

#[derive(Serialize)]
pub struct Report {
    pub info: RunMetadata,
    pub record_count: usize,
    pub oversize_count: usize,
    pub records: Vec<ReportRow>,
    pub optimization_candidates: Vec<ReportRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_mapping: Option<Vec<ArchiveMapping>>,
    pub validation_rules: Vec<RuleRow>,
}

fn row(v: &ValidationResult) -> ReportRow {
    // Commit hashes are abbreviated for readability; other source ids
    // (HEAD, archive paths) pass through untouched.
    let source = if v.record.commit_date.is_some() && v.record.source.len() > 8 {
        v.record.source[..8].to_string()
    } else {
        v.record.source.clone()
    };
    ReportRow {
        source,
        date: v.record.commit_date.map(|d| d.to_string()),
        title: v.record.commit_title.clone(),
        file: v.record.path.clone(),
        size_bytes: v.record.size,
        size_human: v
            .record
            .size
            .map(|s| ByteSize::b(s).to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        category: v.category.label(),
        oversize: v.oversize,
        non_standard: rules::is_non_standard(&v.record.path),
        note: v.note,
    }
}

fn rule_rows() -> Vec<RuleRow> {
    rules::rules()
        .iter()
        .map(|r| RuleRow {
            category: r.category.label(),
            extensions: r.extensions.join("/"),
            max_bytes: r.max_bytes,
            max_human: ByteSize::b(r.max_bytes).to_string(),
            note: r.note,
        })
        .collect()
}

pub fn build_report(
    info: RunMetadata,
    results: &[ValidationResult],
    archive_mapping: Option<Vec<ArchiveMapping>>,
) -> Report {
    let mut records: Vec<ReportRow> = results.iter().map(row).collect();
    // Largest first, unknown sizes last; stable so diff order breaks ties.
    records.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));

    let optimization_candidates = records
        .iter()
        .filter(|r| r.oversize && r.category != FileCategory::Unclassified.label())
        .cloned()
        .collect::<Vec<_>>();
    let oversize_count = results.iter().filter(|r| r.oversize).count();

    Report {
        info,
        record_count: records.len(),
        oversize_count,
        records,
        optimization_candidates,
        archive_mapping,
        validation_rules: rule_rows(),
    }
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let info = &report.info;
    out.push_str(&format!("mode: {}\n", info.mode));
    out.push_str(&format!("target: {}\n", info.target));
    if let Some(branch) = &info.branch {
        out.push_str(&format!("branch: {branch}\n"));
    }
    if let Some(start) = &info.start_date {
        out.push_str(&format!("start date: {start}\n"));
    }
    if let Some(end) = &info.end_date {
        out.push_str(&format!("end date: {end}\n"));
    }
    out.push_str(&format!(
        "files: {}  oversize: {}\n\n",
        report.record_count, report.oversize_count
    ));

    for r in &report.records {
        let verdict = if r.oversize { "OVERSIZE" } else { "OK" };
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            r.source, r.file, r.size_human, r.category, verdict
        ));
    }

    if !report.optimization_candidates.is_empty() {
        out.push_str("\noptimization candidates:\n");
        for r in &report.optimization_candidates {
            out.push_str(&format!(
                "{}\t{}\t{} (budget: {})\n",
                r.file, r.size_human, r.category, r.note
            ));
        }
    }

    if let Some(mappings) = &report.archive_mapping {
        out.push_str("\narchive-to-project mapping:\n");
        for m in mappings {
            let status = if m.matches.is_empty() {
                "unmatched".to_string()
            } else if m.multiple {
                format!("multiple: {}", m.matches.join(", "))
            } else {
                m.matches[0].clone()
            };
            out.push_str(&format!("{}\t{}\n", m.entry, status));
        }
    }
    out
}

/// Write the finished report, JSON or text, to `output` or stdout. Nothing
/// is written until the whole report exists; failed runs emit no output.
pub fn write_report(report: &Report, json: bool, dest: Option<&Path>) -> anyhow::Result<()> {
    let rendered = if json {
        output::to_json_envelope(report)?
    } else {
        render_text(report)
    };
    output::write_out(&rendered, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::FileRecord;
    use crate::services::classify;

    fn meta() -> RunMetadata {
        RunMetadata {
            mode: "snapshot".to_string(),
            target: "/tmp/app".to_string(),
            branch: None,
            start_date: None,
            end_date: None,
            generated_at: "2025-01-01 00:00:00 UTC".to_string(),
        }
    }

    fn result(path: &str, size: Option<u64>) -> ValidationResult {
        classify::classify(FileRecord {
            source: "HEAD".to_string(),
            path: path.to_string(),
            size,
            commit_date: None,
            commit_title: None,
        })
    }

    #[test]
    fn rows_sort_largest_first_with_unknown_last() {
        let results = vec![
            result("small.png", Some(10)),
            result("mystery.png", None),
            result("big.png", Some(999_999)),
        ];
        let report = build_report(meta(), &results, None);
        let files: Vec<&str> = report.records.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["big.png", "small.png", "mystery.png"]);
    }

    #[test]
    fn candidates_hold_only_classified_oversize_rows() {
        let results = vec![
            result("ok.png", Some(100)),
            result("big.png", Some(999_999)),
            result("huge.bin", Some(50_000_000)),
        ];
        let report = build_report(meta(), &results, None);
        assert_eq!(report.oversize_count, 1);
        assert_eq!(report.optimization_candidates.len(), 1);
        assert_eq!(report.optimization_candidates[0].file, "big.png");
    }

    #[test]
    fn rule_sheet_lists_all_thirteen_rows() {
        let report = build_report(meta(), &[], None);
        assert_eq!(report.validation_rules.len(), 13);
    }
}
