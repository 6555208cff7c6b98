//! Interactive application state and key handling.
//!
//! # Responsibility
//! - Map key gestures onto task store operations.
//! - Own the UI-only state: input mode, entry buffer, list selection, and
//!   the current status message.
//!
//! # Invariants
//! - One event is processed to completion (including the synchronous disk
//!   write) before the next is read.
//! - The selection always addresses a task in the current sequence or is
//!   cleared.

use anyhow::Result;
use quicklist_core::{StoreError, TaskStorage, TaskStore};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::ListState;
use ratatui::DefaultTerminal;

use crate::ui;

/// Where key input is routed.
///
/// `Normal` navigates and fires actions; `Insert` types into the entry
/// buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// One-line message shown in the status row until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Warning,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// View controller: task store plus all UI-local state.
pub struct App<S: TaskStorage> {
    pub(crate) store: TaskStore<S>,
    pub(crate) mode: InputMode,
    pub(crate) input_buffer: String,
    pub(crate) list_state: ListState,
    pub(crate) status: Option<StatusLine>,
    should_quit: bool,
}

impl<S: TaskStorage> App<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            list_state: ListState::default(),
            status: None,
            should_quit: false,
        }
    }

    /// Blocking draw/read loop; returns when the user quits.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, &mut self))?;
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key);
            }
        }
        // Resize and other terminal events fall through to the next redraw.
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Insert => self.handle_insert_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Char('a' | 'i'), _) => {
                self.status = None;
                self.mode = InputMode::Insert;
            }
            (KeyCode::Char('j') | KeyCode::Down, _) => self.select_next(),
            (KeyCode::Char('k') | KeyCode::Up, _) => self.select_previous(),
            (KeyCode::Esc, _) => {
                self.list_state.select(None);
                self.status = None;
            }
            (KeyCode::Char(' ' | 'c'), _) => self.toggle_selected(),
            (KeyCode::Char('d') | KeyCode::Delete, _) => self.delete_selected(),
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Enter, _) => self.submit_input(),
            (KeyCode::Esc, _) => {
                self.input_buffer.clear();
                self.mode = InputMode::Normal;
            }
            (KeyCode::Char(c), _) => {
                self.input_buffer.push(c);
            }
            (KeyCode::Backspace, _) => {
                self.input_buffer.pop();
            }
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        match self.store.add(&self.input_buffer) {
            Ok(()) => {
                let text = self.input_buffer.trim().to_string();
                self.input_buffer.clear();
                self.mode = InputMode::Normal;
                self.status = Some(StatusLine::info(format!("added \"{text}\"")));
            }
            Err(err @ StoreError::Validation(_)) => {
                // Nothing was added; stay in insert mode so the user can type.
                self.report_error(&err);
            }
            Err(err) => {
                // The task is in memory even though the save failed.
                self.input_buffer.clear();
                self.mode = InputMode::Normal;
                self.report_error(&err);
            }
        }
        self.clamp_selection();
    }

    fn toggle_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            self.status = Some(StatusLine::warning("select a task first (j/k)"));
            return;
        };
        match self.store.toggle_complete(index) {
            Ok(()) => self.status = None,
            Err(err) => self.report_error(&err),
        }
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            self.status = Some(StatusLine::warning("select a task first (j/k)"));
            return;
        };
        match self.store.delete(index) {
            Ok(removed) => {
                self.status = Some(StatusLine::info(format!("deleted \"{}\"", removed.text)));
            }
            Err(err) => self.report_error(&err),
        }
        // The sequence may have shrunk even on a failed save.
        self.clamp_selection();
    }

    fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(selected) => (selected + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(selected) => selected.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn report_error(&mut self, err: &StoreError) {
        let status = match err {
            StoreError::Validation(_) => StatusLine::warning("enter some task text first"),
            StoreError::InvalidIndex { .. } => StatusLine::warning("select a task first (j/k)"),
            StoreError::SaveFailed(_) => StatusLine::error(err.to_string()),
        };
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::{App, InputMode, StatusKind};
    use quicklist_core::{MemoryStorage, TaskStorage, TaskStore};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app_with_tasks(texts: &[&str]) -> App<MemoryStorage> {
        let storage = MemoryStorage::new();
        let mut store = TaskStore::load(storage);
        for text in texts {
            store.add(text).unwrap();
        }
        App::new(store)
    }

    fn press<S: TaskStorage>(app: &mut App<S>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text<S: TaskStorage>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn insert_mode_typing_and_enter_adds_a_task() {
        let mut app = app_with_tasks(&[]);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, InputMode::Insert);

        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn submitting_whitespace_warns_and_stays_in_insert_mode() {
        let mut app = app_with_tasks(&[]);

        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, InputMode::Insert);
        assert!(app.store.is_empty());
        let status = app.status.as_ref().expect("warning should be shown");
        assert_eq!(status.kind, StatusKind::Warning);
    }

    #[test]
    fn escape_cancels_insert_without_mutation() {
        let mut app = app_with_tasks(&[]);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "draft");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.input_buffer.is_empty());
        assert!(app.store.is_empty());
    }

    #[test]
    fn toggle_without_selection_warns_without_state_change() {
        let mut app = app_with_tasks(&["one"]);

        press(&mut app, KeyCode::Char(' '));

        assert!(!app.store.tasks()[0].completed);
        let status = app.status.as_ref().expect("warning should be shown");
        assert_eq!(status.kind, StatusKind::Warning);
    }

    #[test]
    fn navigation_selects_and_space_toggles() {
        let mut app = app_with_tasks(&["one", "two"]);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.selected(), Some(0));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.selected(), Some(1));
        // Selection stops at the last row.
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.selected(), Some(1));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.tasks()[1].completed);
        assert!(!app.store.tasks()[0].completed);
    }

    #[test]
    fn delete_clamps_selection_to_the_new_tail() {
        let mut app = app_with_tasks(&["one", "two"]);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.selected(), Some(1));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));

        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn delete_without_selection_warns() {
        let mut app = app_with_tasks(&["one"]);

        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.store.len(), 1);
        let status = app.status.as_ref().expect("warning should be shown");
        assert_eq!(status.kind, StatusKind::Warning);
    }

    #[test]
    fn failed_save_shows_an_error_but_keeps_the_mutation() {
        let storage = MemoryStorage::new();
        let mut store = TaskStore::load(&storage);
        store.add("one").unwrap();
        let mut app = App::new(store);

        storage.fail_saves(true);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));

        let status = app.status.as_ref().expect("save error should be shown");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(app.store.tasks()[0].completed);
        assert!(!storage.saved_tasks()[0].completed);
    }

    #[test]
    fn escape_clears_the_selection_back_to_idle() {
        let mut app = app_with_tasks(&["one"]);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.selected(), Some(0));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.list_state.selected(), None);
    }
}
