//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `audit.rs` — the four audit-mode handlers.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate audit logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod audit;

pub use audit::handle;
