use crate::model::todo::Todo;
use crate::ops::search::EMPTY_MESSAGE;

/// One line per todo: `<id>  <text>`, or the empty-state message.
pub fn format_todo_lines(todos: &[&Todo]) -> String {
    if todos.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    todos
        .iter()
        .map(|t| format!("{}  {}", t.id, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The filtered todos as a JSON array of `{id, text}`
pub fn format_todos_json(todos: &[&Todo]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(todos)
}
