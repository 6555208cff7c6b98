//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted to storage.
//! - Validate the non-empty-text invariant before any persistence write.
//!
//! # Invariants
//! - `text` is non-empty after trimming for every constructed task.
//! - `completed` starts as `false` on creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A single task entry: short text plus a completion flag.
///
/// Serialized with exactly the keys `text` and `completed`; the persisted
/// file is an ordered array of these records and the array order is the
/// display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// User-entered task text, stored trimmed.
    pub text: String,
    /// Whether the task has been marked done.
    pub completed: bool,
}

/// Validation failure for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty once surrounding whitespace is removed.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty after trimming"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates a new pending task from user input.
    ///
    /// # Contract
    /// - Surrounding whitespace is trimmed off before storing.
    /// - `completed` starts as `false`.
    /// - Returns `EmptyText` when nothing remains after trimming.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskValidationError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            text: trimmed.to_string(),
            completed: false,
        })
    }

    /// Checks the non-empty-text invariant on an already-built record.
    ///
    /// Used by load paths to reject invalid persisted state.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
