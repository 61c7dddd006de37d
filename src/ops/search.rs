use regex::Regex;

use crate::model::todo::Todo;

/// Shown in place of an empty filtered view
pub const EMPTY_MESSAGE: &str = "Data Not Found!";

/// Case-insensitive substring test. An empty query matches everything.
fn matches_query(text: &str, query: &str) -> bool {
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

/// The subsequence of `todos` whose text contains `query`, ignoring case.
/// Order is preserved.
pub fn filter_todos<'a>(todos: &'a [Todo], query: &str) -> Vec<&'a Todo> {
    todos
        .iter()
        .filter(|t| matches_query(&t.text, query))
        .collect()
}

/// Literal, case-insensitive regex for highlighting `query` inside rendered
/// text. None for an empty query.
pub fn highlight_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}
