//! Frame rendering.
//!
//! # Responsibility
//! - Rebuild the entire visible frame from app state on every draw; there is
//!   no incremental diffing.

use quicklist_core::{Task, TaskStorage};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{App, InputMode, StatusKind};

const PENDING_MARKER: &str = "□ ";
const DONE_MARKER: &str = "✓ ";

pub fn draw<S: TaskStorage>(frame: &mut Frame, app: &mut App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // entry field
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    draw_title(frame, rows[0]);
    draw_entry(frame, rows[1], app);
    draw_tasks(frame, rows[2], app);
    draw_status(frame, rows[3], app);
    draw_help(frame, rows[4], app.mode);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" quicklist ", Style::default().bold().fg(Color::Cyan)),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(title, area);
}

fn draw_entry<S: TaskStorage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let border_style = match app.mode {
        InputMode::Insert => Style::default().fg(Color::Cyan),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };
    let entry = Paragraph::new(app.input_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" new task "),
    );
    frame.render_widget(entry, area);

    if app.mode == InputMode::Insert {
        let cursor_x = area.x + 1 + app.input_buffer.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn draw_tasks<S: TaskStorage>(frame: &mut Frame, area: Rect, app: &mut App<S>) {
    let items: Vec<ListItem> = app
        .store
        .tasks()
        .iter()
        .map(|task| ListItem::new(task_line(task)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tasks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Renders one task row: completion marker plus text, with completed rows
/// dimmed and struck through.
fn task_line(task: &Task) -> Line<'_> {
    if task.completed {
        Line::from(vec![
            Span::styled(DONE_MARKER, Style::default().fg(Color::Green)),
            Span::styled(
                task.text.as_str(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(PENDING_MARKER),
            Span::raw(task.text.as_str()),
        ])
    }
}

fn draw_status<S: TaskStorage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let line = match &app.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Info => Style::default().fg(Color::Green),
                StatusKind::Warning => Style::default().fg(Color::Yellow),
                StatusKind::Error => Style::default().fg(Color::Red).bold(),
            };
            Line::from(Span::styled(format!(" {}", status.text), style))
        }
        None => Line::from(Span::styled(
            format!(" {}", summary(app.store.len(), app.store.completed_count())),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(line, area);
}

fn summary(total: usize, done: usize) -> String {
    match total {
        0 => "no tasks yet — press a to add one".to_string(),
        1 => format!("1 task · {done} done"),
        _ => format!("{total} tasks · {done} done"),
    }
}

fn draw_help(frame: &mut Frame, area: Rect, mode: InputMode) {
    let key = Style::default().fg(Color::Yellow).bold();
    let line = match mode {
        InputMode::Normal => Line::from(vec![
            Span::styled(" a", key),
            Span::raw(" add  "),
            Span::styled("Space", key),
            Span::raw(" done  "),
            Span::styled("d", key),
            Span::raw(" delete  "),
            Span::styled("j/k", key),
            Span::raw(" move  "),
            Span::styled("q", key),
            Span::raw(" quit"),
        ]),
        InputMode::Insert => Line::from(vec![
            Span::styled(" Enter", key),
            Span::raw(" add  "),
            Span::styled("Esc", key),
            Span::raw(" cancel"),
        ]),
    };
    frame.render_widget(line, area);
}
