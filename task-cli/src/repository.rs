use crate::task::Task;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Whole-collection storage for tasks.
///
/// Every invocation loads the full collection and, when it mutates, writes the full
/// collection back. There is no locking: two concurrent invocations race and the last
/// writer wins.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository {
    /// Loads every task. A missing or unreadable store is an empty collection.
    fn load_all(&self) -> Vec<Task>;
    fn save_all(&self, tasks: &[Task]) -> Result<(), RepositoryError>;
}

pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for JsonFileRepository {
    fn load_all(&self) -> Vec<Task> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No task file at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Cannot read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => {
                debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
                tasks
            }
            Err(e) => {
                warn!(
                    "Ignoring unparsable task file {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save_all(&self, tasks: &[Task]) -> Result<(), RepositoryError> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json).map_err(|source| RepositoryError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
