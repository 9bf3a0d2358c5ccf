use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Error type for store path resolution and writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no data directory available on this platform")]
    NoDataDir,
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// Default task file: `<platform data dir>/tick/tasks.json`
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    dirs::data_dir()
        .map(|dir| dir.join("tick").join("tasks.json"))
        .ok_or(StoreError::NoDataDir)
}

/// Resolve the task file path, honoring a `--file` override.
pub fn resolve_store_path(file_override: Option<&str>) -> Result<PathBuf, StoreError> {
    match file_override {
        Some(path) => Ok(PathBuf::from(path)),
        None => default_store_path(),
    }
}

/// Read the task list from disk.
///
/// A missing, unreadable, or unparsable file yields an empty list; no error
/// reaches the caller. Saved tasks degrade to "no saved tasks".
pub fn read_tasks(path: &Path) -> Vec<Task> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// Write the full task list, replacing prior content. Parent directories are
/// created as needed; the write goes through a temp file in the target
/// directory and renames into place.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let write_err = |source: io::Error| StoreError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(write_err)?;
    let content = serde_json::to_string_pretty(tasks)
        .map_err(io::Error::from)
        .map_err(write_err)?;
    atomic_write(path, content.as_bytes()).map_err(write_err)
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
