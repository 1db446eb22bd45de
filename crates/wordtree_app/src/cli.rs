use std::path::PathBuf;

use clap::Parser;
use wordtree_engine::OutputFormat;

use crate::config::AppConfig;

/// Count words in every text field of a JSON batch, keeping the document shape.
#[derive(Debug, Clone, Parser)]
#[command(name = "wordtree", version, about)]
pub struct Cli {
    /// JSON file holding an array of documents, or a single document.
    pub input: PathBuf,

    /// Write results here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Drop pipeline noise keys and replace list-like keys with their length before counting.
    #[arg(long)]
    pub prune: bool,

    /// Keep null fields as empty word counts instead of leaving them out.
    #[arg(long)]
    pub keep_nulls: bool,

    /// Deepest nesting level that is counted.
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// RON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write logs to ./wordtree.log.
    #[arg(long)]
    pub log_file: bool,

    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Flags win over the file; boolean flags can only switch features on.
    pub fn merge_into(&self, mut config: AppConfig) -> AppConfig {
        if self.prune {
            config.prune.enabled = true;
        }
        if self.keep_nulls {
            config.count.keep_nulls = true;
        }
        if let Some(depth) = self.max_depth {
            config.count.max_depth = depth;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }

    pub fn format(&self) -> OutputFormat {
        if self.compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty
        }
    }
}
