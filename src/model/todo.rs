use serde::{Deserialize, Serialize};

/// A single to-do item as stored under the `todos` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the list, assigned at creation
    pub id: String,
    pub text: String,
}

impl Todo {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Todo {
            id: id.into(),
            text: text.into(),
        }
    }
}
