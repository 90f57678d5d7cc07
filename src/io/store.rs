use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Error type for task file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid task data in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Load the task list from `path`.
///
/// A missing file is the first-run case and yields an empty list. A file that
/// holds JSON `null` is also treated as empty. Ids must be unique and lie in
/// `1..u64::MAX`, leaving room for a next id.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let tasks: Option<Vec<Task>> =
        serde_json::from_str(&text).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    let tasks = tasks.unwrap_or_default();
    check_ids(&tasks).map_err(|reason| StoreError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(tasks)
}

fn check_ids(tasks: &[Task]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        match task.id {
            0 => return Err("task id 0 is reserved".to_string()),
            u64::MAX => return Err(format!("task id {} is out of range", task.id)),
            id if !seen.insert(id) => return Err(format!("duplicate task id {}", id)),
            _ => {}
        }
    }
    Ok(())
}

/// Replace the file at `path` with the serialized task list
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut content = serde_json::to_string_pretty(tasks).map_err(|e| write_err(e.into()))?;
    content.push('\n');
    atomic_write(path, content.as_bytes()).map_err(write_err)
}

/// The id the next created task should receive. Saturates at `u64::MAX`,
/// which is never handed out.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .map(|t| t.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Write to a temp file in the target's directory, then rename over the target.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
