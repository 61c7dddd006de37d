use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

use super::edit::begin_edit;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.screen.filtered().len();
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor movement
        KeyCode::Down | KeyCode::Char('j') => {
            if app.list_cursor + 1 < len {
                app.list_cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        KeyCode::Home | KeyCode::Char('g') => app.list_cursor = 0,
        KeyCode::End | KeyCode::Char('G') => app.list_cursor = len.saturating_sub(1),

        // Row actions
        KeyCode::Enter | KeyCode::Char('e') => begin_edit(app),
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') => {
            let Some(id) = app.selected().map(|t| t.id.clone()) else {
                return;
            };
            let result = app.screen.delete(&id);
            app.note_result(result);
            app.clamp_cursor();
        }

        // Field focus
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus = Focus::NewTodo,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Esc => {
            if !app.screen.ui.search_query.is_empty() {
                app.screen.set_search_query("");
                app.search_cursor = 0;
                app.clamp_cursor();
            }
        }
        _ => {}
    }
}
