//! Terminal front end for the QuickList task manager.
//!
//! # Responsibility
//! - Resolve application paths, bootstrap logging, load the store.
//! - Own the terminal for the lifetime of the interactive session.

use anyhow::{Context, Result};
use quicklist_core::{default_log_level, init_logging, JsonFileStorage, TaskStore};

mod app;
mod paths;
mod ui;

use app::App;
use paths::AppPaths;

fn main() -> Result<()> {
    let paths = AppPaths::resolve().context("failed to prepare application data directory")?;

    // Logging failure is non-fatal; the app runs without logs.
    if let Err(err) = init_logging(default_log_level(), &paths.log_dir()) {
        eprintln!("quicklist: logging disabled: {err}");
    }

    let store = TaskStore::load(JsonFileStorage::new(paths.tasks_file()));

    let mut terminal = ratatui::init();
    let result = App::new(store).run(&mut terminal);
    ratatui::restore();
    result
}
