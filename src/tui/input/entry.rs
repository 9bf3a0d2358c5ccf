use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common::handle_buffer_key;

pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        // Leave entry mode; the draft is kept for re-entry
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => submit_entry(app),
        _ => {
            handle_buffer_key(&mut app.entry, key);
        }
    }
}

/// Submit the entry draft.
///
/// A whitespace-only draft is ignored: no task, no reset, no feedback.
/// Otherwise the trimmed text becomes a new incomplete task, the draft
/// clears, and entry mode stays active for the next task.
fn submit_entry(app: &mut App) {
    let text = app.entry.trimmed().to_string();
    if text.is_empty() {
        return;
    }
    app.store.add(text);
    app.entry.clear();
    app.cursor = app.store.len().saturating_sub(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn submit_adds_a_task_and_resets_the_draft() {
        let (_dir, mut app) = App::for_tests();
        app.mode = Mode::Entry;
        type_text(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.store.len(), 1);
        let task = &app.store.tasks()[0];
        assert_eq!(task.description, "Buy milk");
        assert!(!task.state);
        assert!(app.entry.is_empty());
        // Still in entry mode, ready for the next task
        assert_eq!(app.mode, Mode::Entry);
    }

    #[test]
    fn submit_trims_surrounding_whitespace() {
        let (_dir, mut app) = App::for_tests();
        app.mode = Mode::Entry;
        type_text(&mut app, "  Walk dog  ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.tasks()[0].description, "Walk dog");
    }

    #[test]
    fn empty_submit_is_silently_ignored() {
        let (_dir, mut app) = App::for_tests();
        app.mode = Mode::Entry;
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.store.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn whitespace_only_submit_keeps_the_draft() {
        let (_dir, mut app) = App::for_tests();
        app.mode = Mode::Entry;
        type_text(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.store.is_empty());
        // Not reset: the draft still holds the spaces
        assert_eq!(app.entry.text, "   ");
        assert_eq!(app.mode, Mode::Entry);
    }

    #[test]
    fn esc_keeps_the_draft_for_reentry() {
        let (_dir, mut app) = App::for_tests();
        app.mode = Mode::Entry;
        type_text(&mut app, "half a tho");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.entry.text, "half a tho");
        // Re-entering picks up where we left off
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::Entry);
        type_text(&mut app, "ught");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.tasks()[0].description, "half a thought");
    }

    #[test]
    fn cursor_follows_the_new_task() {
        let (_dir, mut app) = App::for_tests();
        app.store.add("one".into());
        app.store.add("two".into());
        app.mode = Mode::Entry;
        type_text(&mut app, "three");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.cursor, 2);
    }
}
