//! Archive entry listing for package audits (APK/AAB are zip containers).

use crate::domain::errors::AuditError;
use std::fs::File;
use std::path::Path;

/// Uncompressed (entry path, byte size) pairs in central-directory order.
/// Directory entries are skipped.
pub fn read_entries(archive: &Path) -> Result<Vec<(String, u64)>, AuditError> {
    if !archive.is_file() {
        return Err(AuditError::NotFound(archive.display().to_string()));
    }
    let file = File::open(archive)
        .map_err(|e| AuditError::ArchiveRead(format!("{}: {e}", archive.display())))?;
    let mut zip = zip::ZipArchive::new(file)
        .map_err(|e| AuditError::ArchiveRead(format!("{}: {e}", archive.display())))?;

    let mut entries = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        let entry = zip
            .by_index(i)
            .map_err(|e| AuditError::ArchiveRead(format!("entry {i}: {e}")))?;
        if entry.is_dir() {
            continue;
        }
        entries.push((entry.name().to_string(), entry.size()));
    }
    Ok(entries)
}
