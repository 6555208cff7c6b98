//! Task store: the in-memory task sequence plus its persistence flow.
//!
//! # Responsibility
//! - Hold the ordered task sequence and apply the three user mutations
//!   (add, toggle-complete, delete).
//! - Rewrite storage after every mutation.
//!
//! # Invariants
//! - Task identity is positional; mutations address tasks by index.
//! - A failed save never rolls back the in-memory mutation: the next
//!   successful save still includes the change.
//! - Load never fails to the caller; unreadable or invalid storage is
//!   treated as an empty sequence.

use crate::model::task::{Task, TaskValidationError};
use crate::storage::{StorageError, TaskStorage};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by task store operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    /// The index does not address a task in the current sequence.
    InvalidIndex { index: usize, len: usize },
    /// The mutation is applied in memory but could not be persisted.
    SaveFailed(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidIndex { index, len } => {
                write!(f, "no task at index {index} (list has {len} entries)")
            }
            Self::SaveFailed(err) => write!(f, "failed to save tasks: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidIndex { .. } => None,
            Self::SaveFailed(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// The task list plus its storage backend.
pub struct TaskStore<S: TaskStorage> {
    tasks: Vec<Task>,
    storage: S,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Loads the stored sequence and wraps it with the backend.
    ///
    /// # Contract
    /// - Returns the stored sequence when it is present and valid.
    /// - Returns an empty store on any load failure; the recovery is logged
    ///   but never surfaced to the caller.
    pub fn load(storage: S) -> Self {
        let tasks = match storage.load_tasks() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(
                    "event=tasks_load module=store status=recovered error={err}"
                );
                Vec::new()
            }
        };
        Self { tasks, storage }
    }

    /// Appends a new pending task from user input and persists.
    ///
    /// # Contract
    /// - Whitespace-only input returns `Validation` without mutating.
    /// - The stored text is the trimmed input; `completed` starts `false`.
    pub fn add(&mut self, text: &str) -> StoreResult<()> {
        let task = Task::new(text)?;
        self.tasks.push(task);
        info!("event=task_add module=store status=ok len={}", self.tasks.len());
        self.save()
    }

    /// Flips the completion flag of the task at `index` and persists.
    pub fn toggle_complete(&mut self, index: usize) -> StoreResult<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::InvalidIndex { index, len })?;
        task.toggle();
        info!(
            "event=task_toggle module=store status=ok index={index} completed={}",
            task.completed
        );
        self.save()
    }

    /// Removes the task at `index` and persists.
    ///
    /// Later entries shift down by one; returns the removed task.
    pub fn delete(&mut self, index: usize) -> StoreResult<Task> {
        if index >= self.tasks.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.tasks.len(),
            });
        }
        let removed = self.tasks.remove(index);
        info!(
            "event=task_delete module=store status=ok index={index} len={}",
            self.tasks.len()
        );
        self.save()?;
        Ok(removed)
    }

    /// Rewrites the full sequence to storage.
    ///
    /// A write failure returns `SaveFailed`; the in-memory sequence is kept
    /// as-is so a later save can still persist it.
    pub fn save(&mut self) -> StoreResult<()> {
        match self.storage.save_tasks(&self.tasks) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("event=tasks_save module=store status=error error={err}");
                Err(StoreError::SaveFailed(err))
            }
        }
    }

    /// The current sequence in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks currently marked done.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}
