use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sizecheck",
    version,
    about = "Audit Android project file sizes against per-category budgets"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Write the report to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit the current working tree
    Snapshot {
        /// Path to the git project
        repo: PathBuf,
        #[arg(long, help = "Only include these extensions (comma-separated)")]
        types: Option<String>,
    },
    /// Audit files changed per commit inside a date window
    Commits {
        /// Path to the git project
        repo: PathBuf,
        #[arg(long, help = "Window start, inclusive (YYYY-MM-DD)")]
        start_date: Option<String>,
        #[arg(long, help = "Window end, inclusive (YYYY-MM-DD)")]
        end_date: Option<String>,
        #[arg(long, help = "Check out this branch first (requires a clean tree)")]
        branch: Option<String>,
        #[arg(long, help = "Only include these extensions (comma-separated)")]
        types: Option<String>,
    },
    /// Audit every file ever touched, at its most recent size
    History {
        /// Path to the git project
        repo: PathBuf,
        #[arg(long, help = "Check out this branch first (requires a clean tree)")]
        branch: Option<String>,
        #[arg(long, help = "Only include these extensions (comma-separated)")]
        types: Option<String>,
    },
    /// Audit the contents of a built package (APK/AAB) and map entries back
    /// to project sources
    Archive {
        /// Path to the package archive
        archive: PathBuf,
        #[arg(long, help = "Project root used for entry-to-source mapping")]
        project: PathBuf,
    },
}
