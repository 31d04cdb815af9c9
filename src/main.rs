use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::{Cli, Commands};
pub use domain::errors::AuditError;
pub use domain::models::{
    ArchiveMapping, CommitInfo, CommitWindow, FileCategory, FileRecord, JsonOut, ValidationResult,
    ValidationRule,
};
pub use services::enumerate::ExtensionFilter;
pub use services::report::{build_report, write_report, Report, ReportRow, RunMetadata};
pub use services::{archive, classify, enumerate, git, history, mapping, output, rules};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::handle(&cli)
}
