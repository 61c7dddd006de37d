//! The to-do screen's state container.
//!
//! `TodoScreen` owns the persisted todo list and the transient UI state
//! separately. Every mutation builds the complete next list, writes it to
//! the store in full, and only then replaces the in-memory list, so what
//! is displayed always matches what was last persisted.

use tracing::{error, info, warn};

use crate::io::persistence::{PersistError, load_todos, save_todos};
use crate::io::store::KeyValueStore;
use crate::model::todo::Todo;
use crate::ops::search::filter_todos;
use crate::ops::todo_ops;

/// Error type for screen mutations
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("could not save todos: {0}")]
    Persist(#[from] PersistError),
}

/// Interaction state that never reaches the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Text of the new-item field
    pub new_todo: String,
    /// Live search text
    pub search_query: String,
    /// Id of the todo being edited. Stale while the modal is closed.
    pub edit_target: String,
    /// In-progress edited text. Stale while the modal is closed.
    pub edit_buffer: String,
    pub edit_modal_open: bool,
}

pub struct TodoScreen<S> {
    store: S,
    todos: Vec<Todo>,
    pub ui: UiState,
}

impl<S: KeyValueStore> TodoScreen<S> {
    /// A screen with an empty list. Nothing is read from the store.
    pub fn new(store: S) -> Self {
        TodoScreen {
            store,
            todos: Vec::new(),
            ui: UiState::default(),
        }
    }

    /// A screen populated from the store. An absent value gives an empty
    /// list; read and decode failures are logged and swallowed.
    pub fn load(store: S) -> Self {
        let mut screen = Self::new(store);
        screen.reload();
        screen
    }

    /// Replace the list with the stored one. An absent value or a failed
    /// read leaves the list as it is.
    fn reload(&mut self) {
        match load_todos(&self.store) {
            Ok(Some(todos)) => self.todos = todos,
            Ok(None) => {}
            Err(e) => error!("could not load todos: {}", e),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Todos matching the current search text
    pub fn filtered(&self) -> Vec<&Todo> {
        filter_todos(&self.todos, &self.ui.search_query)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn is_editing(&self) -> bool {
        self.ui.edit_modal_open
    }

    // -----------------------------------------------------------------------
    // Field updates
    // -----------------------------------------------------------------------

    pub fn set_new_todo(&mut self, text: impl Into<String>) {
        self.ui.new_todo = text.into();
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.ui.search_query = text.into();
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        self.ui.edit_buffer = text.into();
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Add the new-item field's text as a todo and clear the field.
    /// Returns the new id, or None when the field is blank (nothing is
    /// written). On a write failure the field keeps its text.
    pub fn add(&mut self) -> Result<Option<String>, TodoError> {
        let text = self.ui.new_todo.clone();
        let id = self.add_text(&text)?;
        if id.is_some() {
            self.ui.new_todo.clear();
        }
        Ok(id)
    }

    /// Add `text` as a todo without touching the new-item field.
    pub fn add_text(&mut self, text: &str) -> Result<Option<String>, TodoError> {
        let mut next = self.todos.clone();
        let Some(id) = todo_ops::add_todo(&mut next, text) else {
            return Ok(None);
        };
        self.commit(next)?;
        info!(id = %id, "added todo");
        Ok(Some(id))
    }

    /// Open the edit modal for `id`, pre-filled with `text`.
    pub fn start_edit(&mut self, id: &str, text: &str) {
        self.ui.edit_target = id.to_string();
        self.ui.edit_buffer = text.to_string();
        self.ui.edit_modal_open = true;
    }

    /// Write the edit buffer into the target todo and close the modal.
    /// The full list is persisted even when no todo matched. Returns
    /// whether a todo changed. On a write failure the modal stays open.
    pub fn commit_edit(&mut self) -> Result<bool, TodoError> {
        let mut next = self.todos.clone();
        let changed = todo_ops::edit_text(&mut next, &self.ui.edit_target, &self.ui.edit_buffer);
        if !changed {
            warn!(id = %self.ui.edit_target, "edit target not found");
        }
        self.commit(next)?;
        self.ui.edit_modal_open = false;
        if changed {
            info!(id = %self.ui.edit_target, "updated todo");
        }
        Ok(changed)
    }

    /// Close the modal without changing anything.
    pub fn cancel_edit(&mut self) {
        self.ui.edit_modal_open = false;
    }

    /// Remove the todo with `id` and persist. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, TodoError> {
        let mut next = self.todos.clone();
        let removed = todo_ops::delete_todo(&mut next, id);
        self.commit(next)?;
        if removed {
            info!(id = %id, "deleted todo");
        }
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<Todo>) -> Result<(), TodoError> {
        if let Err(e) = save_todos(&mut self.store, &next) {
            error!("could not save todos: {}", e);
            return Err(e.into());
        }
        self.todos = next;
        Ok(())
    }
}
