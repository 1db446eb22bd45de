use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("failed to render results: {0}")]
    Render(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the directory that will hold `target` exists; create it if missing.
pub fn ensure_parent_dir(target: &Path) -> Result<PathBuf, PersistError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if dir.exists() {
        let meta = fs::metadata(&dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!("{dir:?} is not a directory")));
        }
    } else {
        fs::create_dir_all(&dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(dir)
}

/// Writes a whole file atomically: content goes to a temp file in the same
/// directory, which then replaces `target`.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Permissions the written file ends up with: those of the file being
    /// replaced, or `0644` for a new file on unix (temp files start as `0600`).
    fn target_permissions(&self) -> Result<Option<fs::Permissions>, PersistError> {
        match fs::metadata(&self.target) {
            Ok(meta) => Ok(Some(meta.permissions())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn write(&self, content: &str) -> Result<PathBuf, PersistError> {
        let dir = ensure_parent_dir(&self.target)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        if let Some(permissions) = self.target_permissions()? {
            tmp.as_file().set_permissions(permissions)?;
        }

        tmp.persist(&self.target)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(self.target.clone())
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
