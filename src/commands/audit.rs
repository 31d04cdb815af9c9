use crate::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// One thin handler per audit mode: enumerate, classify, report.
pub fn handle(cli: &Cli) -> anyhow::Result<()> {
    let report = match &cli.command {
        Commands::Snapshot { repo, types } => {
            let filter = types.as_deref().map(ExtensionFilter::parse);
            let records = enumerate::snapshot(repo, filter)?;
            let results = classify_all(records, "scanning working tree");
            build_report(snapshot_meta("snapshot", repo), &results, None)
        }
        Commands::Commits {
            repo,
            start_date,
            end_date,
            branch,
            types,
        } => {
            let window = CommitWindow::parse(
                start_date.as_deref(),
                end_date.as_deref(),
                branch.clone(),
            )?;
            let walker = enumerate::commit_range(repo, &window)?;
            let meta = history_meta("commits", repo, &window);
            let filter = types.as_deref().map(ExtensionFilter::parse);
            let records = walker
                .records()
                .filter(move |r| enumerate::keep(&filter, &r.path));
            let results = classify_all(records, "processing commits");
            build_report(meta, &results, None)
        }
        Commands::History { repo, branch, types } => {
            let records = enumerate::all_history(repo, branch.clone())?;
            let window = CommitWindow::new(None, None, branch.clone())?;
            let meta = history_meta("history", repo, &window);
            let filter = types.as_deref().map(ExtensionFilter::parse);
            let records = records
                .into_iter()
                .filter(move |r| enumerate::keep(&filter, &r.path));
            let results = classify_all(records, "processing history");
            build_report(meta, &results, None)
        }
        Commands::Archive { archive, project } => {
            git::ensure_repo(project)?;
            let records = enumerate::archive(archive)?;
            let entry_paths: Vec<String> = records.iter().map(|r| r.path.clone()).collect();
            let mappings = mapping::map_entries(&entry_paths, project);
            let results = classify_all(records.into_iter(), "reading archive");
            let meta = RunMetadata {
                mode: "archive".to_string(),
                target: archive.display().to_string(),
                branch: None,
                start_date: None,
                end_date: None,
                generated_at: now_stamp(),
            };
            build_report(meta, &results, Some(mappings))
        }
    };
    write_report(&report, cli.json, cli.output.as_deref())
}

/// Classify while driving a spinner; progress stays a consumer of the
/// record sequence, the enumerators never see it.
fn classify_all(
    records: impl Iterator<Item = FileRecord>,
    message: &'static str,
) -> Vec<ValidationResult> {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg} ({pos} files)")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    let results: Vec<ValidationResult> = bar.wrap_iter(records).map(classify::classify).collect();
    bar.finish_and_clear();
    results
}

fn snapshot_meta(mode: &str, repo: &Path) -> RunMetadata {
    RunMetadata {
        mode: mode.to_string(),
        target: repo.display().to_string(),
        branch: git::current_branch(repo).ok(),
        start_date: None,
        end_date: None,
        generated_at: now_stamp(),
    }
}

fn history_meta(mode: &str, repo: &Path, window: &CommitWindow) -> RunMetadata {
    let branch = match &window.branch {
        Some(b) => Some(b.clone()),
        None => git::current_branch(repo).ok(),
    };
    RunMetadata {
        mode: mode.to_string(),
        target: repo.display().to_string(),
        branch,
        start_date: window.start.map(|d| d.to_string()),
        end_date: window.end.map(|d| d.to_string()),
        generated_at: now_stamp(),
    }
}

fn now_stamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
