use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;
use crate::util::line_edit;

use super::edit_key;

/// Open the edit modal for the selected todo
pub(super) fn begin_edit(app: &mut App) {
    let Some((id, text)) = app.selected().map(|t| (t.id.clone(), t.text.clone())) else {
        return;
    };
    app.screen.start_edit(&id, &text);
    app.edit_cursor = text.len();
}

pub(super) fn handle_edit_modal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let result = app.screen.commit_edit();
            app.note_result(result);
        }
        KeyCode::Esc => app.screen.cancel_edit(),
        _ => {
            if let Some(k) = edit_key(key) {
                line_edit::apply(&mut app.screen.ui.edit_buffer, &mut app.edit_cursor, k);
            }
        }
    }
}
