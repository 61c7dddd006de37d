use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::App;
use crate::util::unicode::display_width;

/// A single-line input box
pub struct TextField<'a> {
    pub title: &'a str,
    pub text: &'a str,
    /// Byte offset of the cursor in `text`
    pub cursor: usize,
    pub placeholder: &'a str,
    pub focused: bool,
}

/// Render a bordered text field. Places the terminal cursor when focused.
pub fn render_text_field(frame: &mut Frame, app: &App, area: Rect, field: &TextField) {
    let bg = app.theme.background;
    let border_color = if field.focused {
        app.theme.accent
    } else {
        app.theme.muted
    };
    let title_style = if field.focused {
        Style::default()
            .fg(app.theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.muted).bg(bg)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(format!(" {} ", field.title), title_style))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(1) as usize;
    let line = if field.text.is_empty() {
        Line::from(Span::styled(
            field.placeholder.to_string(),
            Style::default().fg(app.theme.muted).bg(bg),
        ))
    } else {
        let (visible, _) = visible_window(field.text, field.cursor, width);
        Line::from(Span::styled(
            visible.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);

    if field.focused && inner.width > 0 && inner.height > 0 {
        let (_, cursor_col) = visible_window(field.text, field.cursor, width);
        frame.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
    }
}

/// The slice of `text` to show in `width` cells so the cursor stays in view,
/// and the cursor's column within that slice.
pub(super) fn visible_window(text: &str, cursor: usize, width: usize) -> (&str, usize) {
    let cursor = cursor.min(text.len());
    let cursor_col = display_width(&text[..cursor]);
    if cursor_col <= width {
        return (text, cursor_col);
    }

    // Drop graphemes from the left until the cursor fits
    let overflow = cursor_col - width;
    let mut dropped = 0;
    let mut start = 0;
    for (i, g) in text.grapheme_indices(true) {
        if dropped >= overflow {
            start = i;
            break;
        }
        dropped += display_width(g);
        start = i + g.len();
    }
    (&text[start..], cursor_col - dropped)
}
