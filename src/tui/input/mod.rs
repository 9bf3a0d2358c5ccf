mod common;
mod edit;
mod entry;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

pub use common::LineBuffer;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Entry => entry::handle_entry(app, key),
        Mode::Edit => edit::handle_edit(app, key),
    }
}

/// Handle a bracketed paste event: insert into whichever draft is active.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    match app.mode {
        Mode::Entry => app.entry.insert_str(text),
        Mode::Edit => {
            if let Some(edit) = &mut app.edit {
                edit.buffer.insert_str(text);
            }
        }
        Mode::Navigate => {}
    }
}
