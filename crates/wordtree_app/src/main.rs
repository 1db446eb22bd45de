mod cli;
mod config;
mod run;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let summary = run::run(&cli, &mut std::io::stdout().lock())?;
    match &summary.output {
        Some(path) => eprintln!(
            "wordtree: {} documents, {} diagnostics, written to {}",
            summary.documents,
            summary.diagnostics,
            path.display()
        ),
        None => eprintln!(
            "wordtree: {} documents, {} diagnostics",
            summary.documents, summary.diagnostics
        ),
    }
    Ok(())
}
