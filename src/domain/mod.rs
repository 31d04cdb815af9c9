//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep record/verdict/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — categories, rules, records, windows, mappings.
//! - `errors.rs` — terminal audit error kinds.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/git side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` report output. Keep
//! schema-impacting changes explicit.

pub mod errors;
pub mod models;
