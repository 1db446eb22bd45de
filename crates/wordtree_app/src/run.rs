use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use wordtree_engine::{
    count_json_documents, load_documents, prune_documents, render_results, write_results,
    LogDiagnostics,
};
use wordtree_logging::{wordtree_info, wordtree_warn, LogDestination, DEFAULT_LOG_FILE};

use crate::cli::Cli;
use crate::config::{load_config, AppConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub diagnostics: usize,
    pub output: Option<PathBuf>,
}

pub fn run(cli: &Cli, stdout: &mut dyn Write) -> anyhow::Result<RunSummary> {
    let (file_config, missing_config) = match &cli.config {
        Some(path) => match load_config(path)? {
            Some(config) => (config, None),
            None => (AppConfig::default(), Some(path.clone())),
        },
        None => (AppConfig::default(), None),
    };
    let config = cli.merge_into(file_config);

    let destination = if cli.log_file {
        LogDestination::Both(PathBuf::from(DEFAULT_LOG_FILE))
    } else {
        LogDestination::Terminal
    };
    wordtree_logging::initialize(destination, config.level()?);
    if let Some(path) = missing_config {
        wordtree_warn!("Config file {:?} not found, using defaults", path);
    }

    let mut documents = load_documents(&cli.input)?;
    let mut sink = LogDiagnostics::new();
    if config.prune.enabled {
        documents = prune_documents(documents, &config.prune.to_options(), &mut sink);
    }
    let results = count_json_documents(&documents, &config.count.to_options(), &mut sink);

    let output = match &cli.output {
        Some(path) => Some(write_results(path, &results, cli.format())?),
        None => {
            let text = render_results(&results, cli.format())?;
            stdout
                .write_all(text.as_bytes())
                .context("failed to write results to stdout")?;
            None
        }
    };

    wordtree_info!(
        "Processed {} documents with {} diagnostics",
        results.len(),
        sink.reported()
    );
    Ok(RunSummary {
        documents: results.len(),
        diagnostics: sink.reported(),
        output,
    })
}
