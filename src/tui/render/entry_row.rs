use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::push_buffer_spans;

/// Render the entry row (new-task form, below the title)
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        "  + ",
        Style::default().fg(app.theme.highlight).bg(bg),
    )];

    if app.mode == Mode::Entry {
        push_buffer_spans(
            &mut spans,
            &app.entry,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.highlight).bg(bg),
        );
    } else if !app.entry.is_empty() {
        // A draft left behind by Esc; shown dimmed until re-entry
        spans.push(Span::styled(
            app.entry.text.clone(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            "a to add a task",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
