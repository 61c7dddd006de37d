use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::{display_width, truncate_to_width};

/// Key hints for the current focus
pub(super) fn key_hints(app: &App) -> &'static str {
    if app.screen.is_editing() {
        return "Enter update  Esc cancel";
    }
    match app.focus {
        Focus::NewTodo => "Enter add  Tab next  Ctrl-C quit",
        Focus::Search => "type to filter  Enter list  Tab next",
        Focus::List => "e edit  d delete  / search  a add  q quit",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let count = format!(
        "{}/{} ",
        app.screen.filtered().len(),
        app.screen.todos().len()
    );
    let count_width = display_width(&count);
    let left_width = width.saturating_sub(count_width + 1);

    let mut spans = Vec::new();
    if let Some(err) = &app.status_error {
        spans.push(Span::styled(
            truncate_to_width(&format!(" {}", err), left_width),
            Style::default().fg(app.theme.delete).bg(bg),
        ));
    } else if app.show_key_hints {
        spans.push(Span::styled(
            truncate_to_width(&format!(" {}", key_hints(app)), left_width),
            Style::default().fg(app.theme.muted).bg(bg),
        ));
    }

    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if content_width + count_width <= width {
        let padding = width - content_width - count_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(count, Style::default().fg(app.theme.muted).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
