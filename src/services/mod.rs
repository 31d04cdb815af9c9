//! Service layer containing the audit logic and side-effect helpers.
//!
//! ## Service map
//! - `rules.rs` — the ordered size-budget table and extension helpers.
//! - `classify.rs` — pure size classification against the table.
//! - `git.rs` — thin `git` subprocess wrapper (log/diff-tree/ls-tree/checkout).
//! - `history.rs` — commit-window traversal and per-commit blob sizing.
//! - `enumerate.rs` — the four audit-mode enumerators.
//! - `archive.rs` — zip entry listing for package audits.
//! - `mapping.rs` — archive-entry-to-project basename mapping.
//! - `report.rs` — sheet assembly and JSON/text rendering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod archive;
pub mod classify;
pub mod enumerate;
pub mod git;
pub mod history;
pub mod mapping;
pub mod output;
pub mod report;
pub mod rules;
