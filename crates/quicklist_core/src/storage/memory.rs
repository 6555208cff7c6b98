//! In-memory storage backend for tests and ephemeral runs.
//!
//! # Responsibility
//! - Mirror the file backend's contract without touching the filesystem.
//! - Allow tests to force save failures and inspect the saved snapshot.

use super::{StorageError, StorageResult, TaskStorage};
use crate::model::task::Task;
use std::cell::{Cell, RefCell};

/// Memory-backed task storage.
///
/// Interior mutability keeps the trait's `&self` contract while letting a
/// test hold the backend by reference and drive a store through `&MemoryStorage`.
#[derive(Default)]
pub struct MemoryStorage {
    snapshot: RefCell<Vec<Task>>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with a stored sequence.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            snapshot: RefCell::new(tasks),
            fail_saves: Cell::new(false),
        }
    }

    /// Makes every subsequent save fail until called again with `false`.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Returns a copy of the last saved sequence.
    pub fn saved_tasks(&self) -> Vec<Task> {
        self.snapshot.borrow().clone()
    }
}

impl TaskStorage for MemoryStorage {
    fn load_tasks(&self) -> StorageResult<Vec<Task>> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        if self.fail_saves.get() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "save disabled by test",
            )));
        }
        *self.snapshot.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
