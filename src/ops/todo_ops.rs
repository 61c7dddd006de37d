use uuid::Uuid;

use crate::model::todo::Todo;

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Fresh id for a new todo (random UUID v4, hyphenated)
pub fn new_todo_id() -> String {
    Uuid::new_v4().to_string()
}

// ---------------------------------------------------------------------------
// List mutations
// ---------------------------------------------------------------------------

/// Append a new todo with a fresh id to the end of the list.
/// Returns the assigned id, or None if `text` is blank after trimming.
/// The stored text is not trimmed.
pub fn add_todo(todos: &mut Vec<Todo>, text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let id = new_todo_id();
    todos.push(Todo::new(id.clone(), text));
    Some(id)
}

/// Replace the text of every todo with `id`. Any text is accepted,
/// including an empty string. Returns false if no todo matched.
pub fn edit_text(todos: &mut [Todo], id: &str, text: &str) -> bool {
    let mut changed = false;
    for todo in todos.iter_mut().filter(|t| t.id == id) {
        todo.text = text.to_string();
        changed = true;
    }
    changed
}

/// Remove the todo with `id`. Remaining todos keep their relative order.
/// Returns false if no todo matched.
pub fn delete_todo(todos: &mut Vec<Todo>, id: &str) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}
