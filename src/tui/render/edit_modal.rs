use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::pad_to_width;

use super::text_field::visible_window;

const EDIT_PLACEHOLDER: &str = "Edit Todo";

/// Render the edit modal centered over `area`
pub fn render_edit_modal(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 56.min(area.width.saturating_sub(2));
    let popup_h: u16 = 7.min(area.height);
    let inner_w = popup_w.saturating_sub(4) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let input_bg = app.theme.cursor_bg;

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let buffer = &app.screen.ui.edit_buffer;
    let (visible, cursor_col) =
        visible_window(buffer, app.edit_cursor, inner_w.saturating_sub(1));
    let input_line = if buffer.is_empty() {
        Span::styled(
            pad_to_width(EDIT_PLACEHOLDER, inner_w),
            Style::default().fg(app.theme.muted).bg(input_bg),
        )
    } else {
        Span::styled(
            pad_to_width(visible, inner_w),
            Style::default().fg(app.theme.text_bright).bg(input_bg),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(" ", Style::default().bg(bg)), input_line]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(app.theme.text_bright).bg(bg)),
            Span::styled(" Update", Style::default().fg(app.theme.edit).bg(bg)),
            Span::styled("    Esc", Style::default().fg(app.theme.text_bright).bg(bg)),
            Span::styled(" Cancel", Style::default().fg(app.theme.delete).bg(bg)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Edit Todo ", header_style))
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);

    // Border (1) + leading space (1) on x; border (1) + blank line (1) on y
    if overlay_area.width > 4 && overlay_area.height > 3 {
        frame.set_cursor_position(Position::new(
            overlay_area.x + 2 + cursor_col as u16,
            overlay_area.y + 2,
        ));
    }
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
