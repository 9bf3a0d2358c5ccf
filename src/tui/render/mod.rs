pub mod entry_row;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::input::LineBuffer;

use super::app::App;

/// Main render function: title, entry row, task list, status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (2 rows incl. separator) | entry row | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    entry_row::render_entry_row(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let name = " tick";
    let count = match app.store.len() {
        1 => "1 task ".to_string(),
        n => format!("{n} tasks "),
    };
    let name_width = name.len();
    let padding = (area.width as usize).saturating_sub(name_width + count.len());

    let line = Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

/// Push spans for an edit buffer with a visible `▌` cursor at its position.
pub(super) fn push_buffer_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    buffer: &LineBuffer,
    text_style: Style,
    cursor_style: Style,
) {
    let before = &buffer.text[..buffer.cursor];
    let after = &buffer.text[buffer.cursor..];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), text_style));
    }
    spans.push(Span::styled("\u{258C}", cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after.to_string(), text_style));
    }
}
