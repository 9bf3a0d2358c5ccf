use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen): transient message or counts on
/// the left, key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = match &app.status_message {
        Some(message) => Span::styled(
            format!(" {message}"),
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
        None => {
            let done = app.store.done_count();
            let total = app.store.len();
            Span::styled(
                format!(" {done}/{total} done"),
                Style::default().fg(app.theme.dim).bg(bg),
            )
        }
    };

    let hint = if app.show_key_hints {
        match app.mode {
            Mode::Navigate => "space toggle  e edit  d delete  a add  ? help  q quit ",
            Mode::Entry => "Enter add  Esc back ",
            Mode::Edit => "Enter save  Esc cancel ",
        }
    } else {
        ""
    };

    let mut spans = vec![left];
    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let hint_width = unicode::display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
