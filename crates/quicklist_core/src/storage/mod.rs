//! Task persistence contracts and backends.
//!
//! # Responsibility
//! - Define the storage seam the task store writes through.
//! - Keep file-format details inside the persistence boundary.
//!
//! # Invariants
//! - `save_tasks` always rewrites the complete sequence; there is no
//!   incremental update path.
//! - Load never returns partially-parsed data: a sequence either parses and
//!   validates as a whole or the call fails.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// Persisted data parsed but violated a model invariant.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Persistence interface for the task sequence.
pub trait TaskStorage {
    /// Reads the full stored sequence.
    ///
    /// A missing backing file is a normal first run and yields an empty
    /// sequence; only unreadable or unparseable state is an error.
    fn load_tasks(&self) -> StorageResult<Vec<Task>>;

    /// Rewrites the full stored sequence, replacing any previous state.
    fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()>;
}

impl<S: TaskStorage + ?Sized> TaskStorage for &S {
    fn load_tasks(&self) -> StorageResult<Vec<Task>> {
        (**self).load_tasks()
    }

    fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        (**self).save_tasks(tasks)
    }
}
