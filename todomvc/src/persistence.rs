//! Persistence adapter: the item list in one storage slot.
//!
//! The slot holds a JSON array of `{id, title, completed}` and is overwritten
//! wholesale on every save. Reading never fails: an absent, unreadable or
//! unparsable slot is an empty list.

use crate::types::TodoList;
use todomvc_core::storage::{KeyValueStorage, StorageError};

/// Serialize the list to the slot format
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] if encoding fails.
pub fn encode(todos: &TodoList) -> Result<String, StorageError> {
    serde_json::to_string(todos).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse the slot format
///
/// Items with a blank title are dropped.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] if `raw` is not a JSON array of items.
pub fn decode(raw: &str) -> Result<TodoList, StorageError> {
    let todos: TodoList =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    let before = todos.len();
    let todos: TodoList = todos
        .into_vec()
        .into_iter()
        .filter(|item| !item.title.trim().is_empty())
        .collect();
    if todos.len() != before {
        tracing::warn!(dropped = before - todos.len(), "Dropped stored items with blank titles");
    }
    Ok(todos)
}

/// Turn the outcome of a slot read into a list
///
/// Absent slots, read errors and parse errors all yield an empty list; the
/// errors are logged.
#[must_use]
pub fn from_read(result: Result<Option<String>, StorageError>) -> TodoList {
    match result {
        Ok(None) => TodoList::new(),
        Ok(Some(raw)) => decode(&raw).unwrap_or_else(|error| {
            tracing::warn!(%error, "Stored todos are unreadable, starting empty");
            TodoList::new()
        }),
        Err(error) => {
            tracing::warn!(%error, "Failed to read todos from storage, starting empty");
            TodoList::new()
        },
    }
}

/// Read the list held under `key`
#[must_use]
pub fn load(storage: &dyn KeyValueStorage, key: &str) -> TodoList {
    let todos = from_read(storage.get_item(key));
    tracing::debug!(key, count = todos.len(), "Loaded todos");
    todos
}

/// Overwrite the slot under `key` with `todos`
///
/// # Errors
///
/// Returns [`StorageError`] if encoding or the write fails.
pub fn save(storage: &dyn KeyValueStorage, key: &str, todos: &TodoList) -> Result<(), StorageError> {
    storage.set_item(key, &encode(todos)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TodoId, TodoItem};
    use todomvc_core::storage::MemoryStorage;
    use todomvc_testing::FailingStorage;

    fn sample() -> TodoList {
        TodoList::from(vec![
            TodoItem::new(TodoId::new("1"), "Buy milk"),
            TodoItem {
                id: TodoId::new("2"),
                title: "Walk <dog>".to_string(),
                completed: true,
            },
        ])
    }

    #[test]
    fn slot_format_is_a_plain_array() {
        let raw = encode(&sample()).unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"1","title":"Buy milk","completed":false},{"id":"2","title":"Walk <dog>","completed":true}]"#
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        save(&storage, "todos", &sample()).unwrap();
        assert_eq!(load(&storage, "todos"), sample());
    }

    #[test]
    fn missing_slot_is_empty() {
        assert!(load(&MemoryStorage::new(), "todos").is_empty());
    }

    #[test]
    fn garbage_is_empty() {
        let storage = MemoryStorage::with_item("todos", "{not json");
        assert!(load(&storage, "todos").is_empty());

        let storage = MemoryStorage::with_item("todos", r#"{"id":"1"}"#);
        assert!(load(&storage, "todos").is_empty());
    }

    #[test]
    fn read_errors_are_empty() {
        assert!(load(&FailingStorage::new("denied"), "todos").is_empty());
    }

    #[test]
    fn blank_titles_are_dropped_on_load() {
        let raw = r#"[{"id":"1","title":"  ","completed":false},{"id":"2","title":"B","completed":false}]"#;
        let todos = decode(raw).unwrap();
        assert_eq!(todos.len(), 1);
        assert!(todos.get(&TodoId::new("2")).is_some());
    }

    #[test]
    fn save_reports_write_errors() {
        let result = save(&FailingStorage::new("quota"), "todos", &sample());
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
    }
}
