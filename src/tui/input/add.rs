use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};
use crate::util::line_edit;

use super::edit_key;

pub(super) fn handle_add_field(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let result = app.screen.add();
            if let Some(Some(_)) = app.note_result(result) {
                app.new_todo_cursor = 0;
            }
            app.clamp_cursor();
        }
        KeyCode::Esc => app.focus = Focus::List,
        _ => {
            if let Some(k) = edit_key(key) {
                line_edit::apply(&mut app.screen.ui.new_todo, &mut app.new_todo_cursor, k);
            }
        }
    }
}
