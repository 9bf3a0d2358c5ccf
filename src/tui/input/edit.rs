use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::handle_buffer_key;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(edit) = &mut app.edit else {
        // No row under edit; fall back to navigation
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        // Cancel: discard the draft, back to viewing
        KeyCode::Esc => {
            app.edit = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => commit_edit(app),
        _ => {
            handle_buffer_key(&mut edit.buffer, key);
        }
    }
}

/// Commit the row draft.
///
/// An empty draft blocks the submission: the row stays in edit mode and the
/// task is untouched, with no feedback. Otherwise the trimmed text replaces
/// the task's description and the row returns to viewing.
fn commit_edit(app: &mut App) {
    let Some(edit) = &app.edit else {
        return;
    };
    let text = edit.buffer.trimmed().to_string();
    if text.is_empty() {
        return;
    }
    app.store.edit(edit.id, text);
    app.edit = None;
    app.mode = Mode::Navigate;
}
