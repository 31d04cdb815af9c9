//! Size classification: pure record-in, verdict-out.

use crate::domain::models::{FileCategory, FileRecord, ValidationResult};
use crate::services::rules;

const NOTE_SIZE_UNAVAILABLE: &str = "size unavailable";
const NOTE_NO_RULE: &str = "no size budget for this file type";

/// Resolve the applicable rule for `record` and flag it when its size
/// strictly exceeds the budget. Size equal to the budget is within bounds.
/// Records without a known size and records matching no rule are never
/// flagged.
pub fn classify(record: FileRecord) -> ValidationResult {
    let ext = rules::extension_of(&record.path);
    let rule = ext
        .as_deref()
        .and_then(|e| rules::rules().iter().find(|r| r.extensions.contains(&e)));

    match rule {
        Some(rule) => match record.size {
            Some(size) => ValidationResult {
                oversize: size > rule.max_bytes,
                category: rule.category,
                note: rule.note,
                record,
            },
            None => ValidationResult {
                oversize: false,
                category: rule.category,
                note: NOTE_SIZE_UNAVAILABLE,
                record,
            },
        },
        None => ValidationResult {
            oversize: false,
            category: FileCategory::Unclassified,
            note: if record.size.is_some() {
                NOTE_NO_RULE
            } else {
                NOTE_SIZE_UNAVAILABLE
            },
            record,
        },
    }
}
