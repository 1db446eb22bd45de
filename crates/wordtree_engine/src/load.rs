use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use wordtree_logging::wordtree_info;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a batch of documents. A top-level array is the batch; any other
/// value is treated as a batch of one.
pub fn parse_documents(text: &str) -> Result<Vec<Value>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

pub fn load_documents(path: &Path) -> Result<Vec<Value>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let documents = parse_documents(&text)?;
    wordtree_info!("Loaded {} documents from {:?}", documents.len(), path);
    Ok(documents)
}
