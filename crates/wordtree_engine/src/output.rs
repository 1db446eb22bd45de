use std::path::{Path, PathBuf};

use serde_json::Value;
use wordtree_core::ResultNode;
use wordtree_logging::wordtree_info;

use crate::convert::value_from_result;
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

/// Renders a batch of results as a JSON array.
pub fn render_results(results: &[ResultNode], format: OutputFormat) -> Result<String, serde_json::Error> {
    let value = Value::Array(results.iter().map(value_from_result).collect());
    let mut text = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(&value)?,
        OutputFormat::Compact => serde_json::to_string(&value)?,
    };
    text.push('\n');
    Ok(text)
}

pub fn write_results(
    target: &Path,
    results: &[ResultNode],
    format: OutputFormat,
) -> Result<PathBuf, PersistError> {
    let content = render_results(results, format)?;
    let written = AtomicFileWriter::new(target.to_path_buf()).write(&content)?;
    wordtree_info!("Wrote {} results to {:?}", results.len(), written);
    Ok(written)
}
