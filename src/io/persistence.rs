use tracing::debug;

use crate::io::store::{KeyValueStore, StoreError};
use crate::model::todo::Todo;

/// Store key holding the JSON-encoded todo list
pub const TODOS_KEY: &str = "todos";

/// Error type for loading and saving the todo list
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("could not decode stored todos: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode todos: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Read the todo list from the store. Ok(None) when nothing was ever saved.
pub fn load_todos<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Vec<Todo>>, PersistError> {
    let Some(raw) = store.get(TODOS_KEY)? else {
        debug!("no stored todos");
        return Ok(None);
    };
    let todos: Vec<Todo> = serde_json::from_str(&raw).map_err(PersistError::Decode)?;
    debug!(count = todos.len(), "loaded todos");
    Ok(Some(todos))
}

/// Overwrite the stored todo list with `todos` in full.
pub fn save_todos<S: KeyValueStore + ?Sized>(
    store: &mut S,
    todos: &[Todo],
) -> Result<(), PersistError> {
    let raw = serde_json::to_string(todos).map_err(PersistError::Encode)?;
    store.set(TODOS_KEY, &raw)?;
    debug!(count = todos.len(), "saved todos");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_key_loads_as_none() {
        let store = MemoryStore::new();
        assert!(load_todos(&store).unwrap().is_none());
    }

    #[test]
    fn save_writes_json_array_under_todos_key() {
        let mut store = MemoryStore::new();
        save_todos(&mut store, &[Todo::new("1", "Buy milk")]).unwrap();
        assert_eq!(
            store.raw(TODOS_KEY),
            Some(r#"[{"id":"1","text":"Buy milk"}]"#)
        );
    }

    #[test]
    fn round_trip_preserves_ids_text_and_order() {
        let todos = vec![
            Todo::new("b", "Walk dog"),
            Todo::new("a", "Buy milk"),
            Todo::new("c", ""),
        ];
        let mut store = MemoryStore::new();
        save_todos(&mut store, &todos).unwrap();
        assert_eq!(load_todos(&store).unwrap(), Some(todos));
    }

    #[test]
    fn empty_list_round_trips_as_some_empty() {
        let mut store = MemoryStore::new();
        save_todos(&mut store, &[]).unwrap();
        assert_eq!(store.raw(TODOS_KEY), Some("[]"));
        assert_eq!(load_todos(&store).unwrap(), Some(vec![]));
    }

    #[test]
    fn corrupt_value_is_decode_error() {
        let store = MemoryStore::with_value(TODOS_KEY, "{not json");
        assert!(matches!(load_todos(&store), Err(PersistError::Decode(_))));
    }

    #[test]
    fn null_value_is_decode_error() {
        let store = MemoryStore::with_value(TODOS_KEY, "null");
        assert!(matches!(load_todos(&store), Err(PersistError::Decode(_))));
    }

    #[test]
    fn store_failure_propagates() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(matches!(
            save_todos(&mut store, &[]),
            Err(PersistError::Store(_))
        ));
    }
}
