mod add;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::line_edit::{self, EditKey};

use super::app::{App, Focus};

use add::handle_add_field;
use edit::handle_edit_modal;
use navigate::handle_navigate;
use search::handle_search_field;

/// Handle a key event for whatever currently has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // The edit modal intercepts all input while open
    if app.screen.is_editing() {
        handle_edit_modal(app, key);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::NewTodo => handle_add_field(app, key),
        Focus::Search => handle_search_field(app, key),
        Focus::List => handle_navigate(app, key),
    }
}

/// Handle a bracketed paste: inserted into the focused text field.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.screen.is_editing() {
        line_edit::insert_str(&mut app.screen.ui.edit_buffer, &mut app.edit_cursor, text);
        return;
    }
    match app.focus {
        Focus::NewTodo => {
            line_edit::insert_str(&mut app.screen.ui.new_todo, &mut app.new_todo_cursor, text);
        }
        Focus::Search => {
            if line_edit::insert_str(&mut app.screen.ui.search_query, &mut app.search_cursor, text)
            {
                app.list_cursor = 0;
            }
        }
        Focus::List => {}
    }
}

/// Map a key to a text-field edit, if it is one
fn edit_key(key: KeyEvent) -> Option<EditKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('a') if ctrl => Some(EditKey::Home),
        KeyCode::Char('e') if ctrl => Some(EditKey::End),
        KeyCode::Char('u') if ctrl => Some(EditKey::ClearToStart),
        KeyCode::Char('w') if ctrl => Some(EditKey::DeleteWordBack),
        KeyCode::Backspace if ctrl || alt => Some(EditKey::DeleteWordBack),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) => Some(EditKey::Char(c)),
        KeyCode::Backspace => Some(EditKey::Backspace),
        KeyCode::Delete => Some(EditKey::Delete),
        KeyCode::Left => Some(EditKey::Left),
        KeyCode::Right => Some(EditKey::Right),
        KeyCode::Home => Some(EditKey::Home),
        KeyCode::End => Some(EditKey::End),
        _ => None,
    }
}
