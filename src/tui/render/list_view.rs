use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::push_buffer_spans;

/// Render the task list content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible_height = area.height as usize;

    // Clamp cursor and keep it on screen
    app.cursor = app.cursor.min(app.store.len().saturating_sub(1));
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    if app.store.is_empty() {
        let empty = Paragraph::new("  no tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let tasks = app.store.tasks();
    let end = tasks.len().min(app.scroll_offset + visible_height);
    let width = area.width as usize;
    // "  [x] " prefix
    let text_budget = width.saturating_sub(6);

    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (idx, task) in tasks[app.scroll_offset..end]
        .iter()
        .enumerate()
        .map(|(i, t)| (app.scroll_offset + i, t))
    {
        let selected = idx == app.cursor;
        let editing = app.mode == Mode::Edit
            && app.edit.as_ref().is_some_and(|e| e.id == task.id)
            && selected;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let checkbox_style = if task.state {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        let mut spans = vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(format!("[{}]", task.checkbox_char()), checkbox_style),
            Span::styled(" ", Style::default().bg(row_bg)),
        ];

        if editing {
            if let Some(edit) = &app.edit {
                push_buffer_spans(
                    &mut spans,
                    &edit.buffer,
                    Style::default().fg(app.theme.text_bright).bg(row_bg),
                    Style::default().fg(app.theme.highlight).bg(row_bg),
                );
            }
        } else {
            let description_style = if task.state {
                Style::default()
                    .fg(app.theme.done)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.description, text_budget),
                description_style,
            ));
        }

        // Pad the selection background across the full row
        if selected {
            let content_width: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
