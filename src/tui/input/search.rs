use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};
use crate::util::line_edit;

use super::edit_key;

pub(super) fn handle_search_field(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Down => app.focus = Focus::List,
        _ => {
            if let Some(k) = edit_key(key)
                && line_edit::apply(&mut app.screen.ui.search_query, &mut app.search_cursor, k)
            {
                // The filtered view changed underneath the cursor
                app.list_cursor = 0;
            }
        }
    }
}
