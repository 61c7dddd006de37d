pub mod edit_modal;
pub mod status_row;
pub mod text_field;
pub mod todo_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, Focus};
use text_field::TextField;

pub const NEW_TODO_PLACEHOLDER: &str = "New Todo";
pub const SEARCH_PLACEHOLDER: &str = "Search Todos";

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: new todo (3 rows) | search (3 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let modal_open = app.screen.is_editing();

    text_field::render_text_field(
        frame,
        app,
        chunks[0],
        &TextField {
            title: "Add",
            text: &app.screen.ui.new_todo,
            cursor: app.new_todo_cursor,
            placeholder: NEW_TODO_PLACEHOLDER,
            focused: !modal_open && app.focus == Focus::NewTodo,
        },
    );
    text_field::render_text_field(
        frame,
        app,
        chunks[1],
        &TextField {
            title: "Search",
            text: &app.screen.ui.search_query,
            cursor: app.search_cursor,
            placeholder: SEARCH_PLACEHOLDER,
            focused: !modal_open && app.focus == Focus::Search,
        },
    );

    todo_list::render_todo_list(frame, app, chunks[2]);

    // Edit modal (rendered on top of everything)
    if modal_open {
        edit_modal::render_edit_modal(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[3]);
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let Some(re) = search_re else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        last_end = m.end();
    }
    if last_end < text.len() || text.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}
