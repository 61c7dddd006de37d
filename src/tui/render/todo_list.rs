use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::search::{EMPTY_MESSAGE, highlight_regex};
use crate::tui::app::{App, Focus};
use crate::util::unicode::{display_width, truncate_to_width};

use super::push_highlighted_spans;

const EDIT_LABEL: &str = " edit ";
const DELETE_LABEL: &str = " delete ";

/// Render the filtered todos, one per row, with edit/delete affordances
pub fn render_todo_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let todos = app.screen.filtered();

    if todos.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.muted).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let visible_height = area.height as usize;
    let scroll = (app.list_cursor + 1).saturating_sub(visible_height);
    let search_re = highlight_regex(&app.screen.ui.search_query);
    let actions_width = display_width(EDIT_LABEL) + 1 + display_width(DELETE_LABEL) + 1;

    let mut lines: Vec<Line> = Vec::new();
    for (i, todo) in todos.iter().enumerate().skip(scroll).take(visible_height) {
        let is_cursor = i == app.list_cursor && app.focus == Focus::List;
        let row_bg = if is_cursor {
            app.theme.cursor_bg
        } else {
            bg
        };

        let text_style = if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let match_style = Style::default()
            .fg(app.theme.match_fg)
            .bg(app.theme.match_bg);

        let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(row_bg))];
        let text_width = width.saturating_sub(actions_width + 2);
        let shown = truncate_to_width(&todo.text, text_width);
        push_highlighted_spans(&mut spans, &shown, text_style, match_style, search_re.as_ref());

        // Right-align the affordances
        let used = 1 + display_width(&shown);
        let pad = width.saturating_sub(used + actions_width);
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(row_bg)));
        if width >= used + actions_width {
            spans.push(Span::styled(
                EDIT_LABEL,
                Style::default().fg(app.theme.text_bright).bg(app.theme.edit),
            ));
            spans.push(Span::styled(" ", Style::default().bg(row_bg)));
            spans.push(Span::styled(
                DELETE_LABEL,
                Style::default().fg(app.theme.text_bright).bg(app.theme.delete),
            ));
            spans.push(Span::styled(" ", Style::default().bg(row_bg)));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
