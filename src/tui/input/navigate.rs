use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, RowEdit};

use super::LineBuffer;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts its own keys
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.store.len().saturating_sub(1);
        }
        KeyCode::Char(' ') => toggle_current(app),
        KeyCode::Char('a') | KeyCode::Char('n') => app.mode = Mode::Entry,
        KeyCode::Char('e') | KeyCode::Enter => start_edit(app),
        KeyCode::Char('d') | KeyCode::Char('x') => delete_current(app),
        _ => {}
    }
}

/// Toggle completion of the task under the cursor
fn toggle_current(app: &mut App) {
    if let Some(id) = app.cursor_task_id() {
        app.store.toggle(id);
    }
}

/// Delete the task under the cursor, keeping the cursor in range
fn delete_current(app: &mut App) {
    let Some(task) = app.cursor_task() else {
        return;
    };
    let id = task.id;
    let description = task.description.clone();
    if app.store.delete(id) {
        app.cursor = app.cursor.min(app.store.len().saturating_sub(1));
        app.status_message = Some(format!("deleted \"{description}\""));
    }
}

/// Enter edit mode for the task under the cursor, seeding the buffer from
/// its committed description
fn start_edit(app: &mut App) {
    if let Some(task) = app.cursor_task() {
        app.edit = Some(RowEdit {
            id: task.id,
            buffer: LineBuffer::from_text(&task.description),
        });
        app.mode = Mode::Edit;
    }
}
