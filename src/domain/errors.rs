use thiserror::Error;

/// Terminal audit failures. Every variant is a precondition violation the
/// caller must fix; nothing here is retried and no partial report is
/// written once one of these surfaces.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("path not found or not a git repository: {0}")]
    NotFound(String),
    #[error("invalid date range: {0}")]
    InvalidRange(String),
    #[error("branch checkout failed: {0}")]
    BranchCheckout(String),
    #[error("cannot read archive: {0}")]
    ArchiveRead(String),
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),
}
