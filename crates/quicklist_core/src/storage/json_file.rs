//! JSON-file storage backend.
//!
//! # Responsibility
//! - Persist the task sequence as a single JSON array of
//!   `{"text": ..., "completed": ...}` objects, in display order.
//! - Overwrite the file in place on every save.
//!
//! # Invariants
//! - A missing file loads as an empty sequence.
//! - Loaded records must pass model validation; a violating record fails the
//!   whole load.

use super::{StorageError, StorageResult, TaskStorage};
use crate::model::task::Task;
use log::info;
use std::path::{Path, PathBuf};

/// File-backed task storage.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend writing to the given file path.
    ///
    /// The parent directory must already exist; this type does not create
    /// directories.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonFileStorage {
    fn load_tasks(&self) -> StorageResult<Vec<Task>> {
        if !self.path.exists() {
            info!(
                "event=tasks_load module=storage status=ok mode=first_run path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&raw)?;
        for (index, task) in tasks.iter().enumerate() {
            task.validate().map_err(|err| {
                StorageError::InvalidData(format!("entry {index}: {err}"))
            })?;
        }

        info!(
            "event=tasks_load module=storage status=ok mode=file count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(tasks)
    }

    fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        let serialized = serde_json::to_string(tasks)?;
        std::fs::write(&self.path, serialized)?;

        info!(
            "event=tasks_save module=storage status=ok count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(())
    }
}
