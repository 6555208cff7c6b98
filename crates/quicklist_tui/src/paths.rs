//! Application path resolution.
//!
//! # Responsibility
//! - Place the task file and log directory under one per-user app directory.
//!
//! # Invariants
//! - The data directory exists after `resolve()` returns.
//! - No environment-variable or CLI overrides; the location is fixed per
//!   platform.

use std::io;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "quicklist";
const TASKS_FILE_NAME: &str = "tasks.json";
const LOG_DIR_NAME: &str = "logs";

/// Resolved per-user application directories.
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    /// Resolves and creates the application data directory.
    ///
    /// Uses the platform-local data directory, falling back to the current
    /// working directory on platforms without one.
    pub fn resolve() -> io::Result<Self> {
        let base = match dirs::data_local_dir() {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let data_dir = base.join(APP_DIR_NAME);
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// The single file holding the persisted task sequence.
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE_NAME)
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::AppPaths;
    use std::path::PathBuf;

    #[test]
    fn derived_paths_live_under_the_data_dir() {
        let paths = AppPaths {
            data_dir: PathBuf::from("/tmp/quicklist-test"),
        };
        assert_eq!(
            paths.tasks_file(),
            PathBuf::from("/tmp/quicklist-test/tasks.json")
        );
        assert_eq!(paths.log_dir(), PathBuf::from("/tmp/quicklist-test/logs"));
    }
}
