use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use qotd_core::scheduler::DEFAULT_SYNC_INTERVAL;

#[derive(Parser)]
#[command(name = "qotd")]
#[command(about = "Collect, filter, and rediscover quotes from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional directory holding the quote collection
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Remote feed URL for sync commands
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one random quote (the default when no command is given)
    Show {
        /// Draw from this category instead of the saved filter
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
    },
    /// Add a quote to the collection
    Add {
        /// Quote text
        text: String,
        /// Category label
        category: String,
    },
    /// List quotes in the collection
    List {
        /// Only show quotes in this category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the saved category filter
    Filter {
        /// New filter value ("all" clears it; omit to show the current one)
        category: Option<String>,
    },
    /// Export the collection to a JSON file
    Export {
        /// Optional output path (quotes.json when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Import quotes from a JSON file, skipping ones already present
    Import {
        /// File to read
        path: PathBuf,
    },
    /// Fetch the remote feed once and merge new quotes
    Sync,
    /// Keep syncing on a fixed interval until interrupted
    Watch {
        /// Seconds between sync passes
        #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_SYNC_INTERVAL.as_secs())]
        interval_secs: u64,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
