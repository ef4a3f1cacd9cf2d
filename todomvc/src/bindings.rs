//! Event bindings: raw UI events to typed actions.
//!
//! Each [`UiEvent`] names the element it fired on. [`bind`] is the whole
//! event table; combinations it does not list produce no action.

use crate::types::{TodoAction, TodoId};

/// Element an event fired on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The new-todo input
    NewTodo,
    /// The mark-all-complete checkbox
    ToggleAll,
    /// A row's completed checkbox
    Toggle(TodoId),
    /// A row's title label
    Label(TodoId),
    /// A row's inline edit field
    Edit(TodoId),
    /// A row's delete button
    Destroy(TodoId),
    /// The clear-completed button
    ClearCompleted,
}

/// Keys the bindings distinguish
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Any other key
    Other,
}

/// A raw user-input event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A key was released; `value` is the field contents afterwards
    KeyUp {
        /// Field the key went to
        target: Target,
        /// Key released
        key: Key,
        /// Field contents
        value: String,
    },
    /// Field text changed
    Input {
        /// Field that changed
        target: Target,
        /// Field contents
        value: String,
    },
    /// A checkbox changed
    Change {
        /// Checkbox that changed
        target: Target,
        /// New checked state
        checked: bool,
    },
    /// Mouse click
    Click {
        /// Element clicked
        target: Target,
    },
    /// Mouse double-click
    DoubleClick {
        /// Element double-clicked
        target: Target,
    },
    /// A field lost focus
    FocusOut {
        /// Field that lost focus
        target: Target,
        /// Field contents
        value: String,
    },
    /// The URL fragment changed
    HashChange {
        /// New fragment
        fragment: String,
    },
}

/// Translate an event into the action it triggers, if any
///
/// Blur on an edit field commits the session draft, not the field value; after
/// Escape has closed the session the commit is a no-op.
#[must_use]
pub fn bind(event: UiEvent) -> Option<TodoAction> {
    let action = match event {
        UiEvent::KeyUp {
            target: Target::NewTodo,
            key: Key::Enter,
            value,
        } => TodoAction::CreateTodo { title: value },

        UiEvent::KeyUp {
            target: Target::Edit(_),
            key,
            value,
        } => match key {
            Key::Enter => TodoAction::CommitEdit,
            Key::Escape => TodoAction::CancelEdit,
            Key::Other => TodoAction::EditDraftChanged { draft: value },
        },

        UiEvent::Input {
            target: Target::Edit(_),
            value,
        } => TodoAction::EditDraftChanged { draft: value },

        UiEvent::Change {
            target: Target::ToggleAll,
            checked,
        } => TodoAction::ToggleAll { completed: checked },

        UiEvent::Change {
            target: Target::Toggle(id),
            ..
        } => TodoAction::ToggleTodo { id },

        UiEvent::DoubleClick {
            target: Target::Label(id),
        } => TodoAction::StartEditing { id },

        UiEvent::FocusOut {
            target: Target::Edit(_),
            ..
        } => TodoAction::CommitEdit,

        UiEvent::Click {
            target: Target::Destroy(id),
        } => TodoAction::DestroyTodo { id },

        UiEvent::Click {
            target: Target::ClearCompleted,
        } => TodoAction::ClearCompleted,

        UiEvent::HashChange { fragment } => TodoAction::Navigate { fragment },

        other => {
            tracing::trace!(event = ?other, "Unbound event");
            return None;
        },
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> TodoId {
        TodoId::new("todo-1")
    }

    fn key_up(target: Target, key: Key, value: &str) -> UiEvent {
        UiEvent::KeyUp {
            target,
            key,
            value: value.to_string(),
        }
    }

    #[test]
    fn enter_on_new_todo_creates() {
        assert_eq!(
            bind(key_up(Target::NewTodo, Key::Enter, "Buy milk")),
            Some(TodoAction::CreateTodo {
                title: "Buy milk".to_string()
            })
        );
    }

    #[test]
    fn other_keys_on_new_todo_are_ignored() {
        assert_eq!(bind(key_up(Target::NewTodo, Key::Other, "Buy")), None);
        assert_eq!(bind(key_up(Target::NewTodo, Key::Escape, "Buy")), None);
    }

    #[test]
    fn edit_field_keys() {
        assert_eq!(
            bind(key_up(Target::Edit(id()), Key::Enter, "x")),
            Some(TodoAction::CommitEdit)
        );
        assert_eq!(
            bind(key_up(Target::Edit(id()), Key::Escape, "x")),
            Some(TodoAction::CancelEdit)
        );
        assert_eq!(
            bind(key_up(Target::Edit(id()), Key::Other, "xy")),
            Some(TodoAction::EditDraftChanged {
                draft: "xy".to_string()
            })
        );
    }

    #[test]
    fn checkboxes() {
        assert_eq!(
            bind(UiEvent::Change {
                target: Target::ToggleAll,
                checked: true
            }),
            Some(TodoAction::ToggleAll { completed: true })
        );
        assert_eq!(
            bind(UiEvent::Change {
                target: Target::Toggle(id()),
                checked: false
            }),
            Some(TodoAction::ToggleTodo { id: id() })
        );
    }

    #[test]
    fn row_gestures() {
        assert_eq!(
            bind(UiEvent::DoubleClick {
                target: Target::Label(id())
            }),
            Some(TodoAction::StartEditing { id: id() })
        );
        assert_eq!(
            bind(UiEvent::Click {
                target: Target::Destroy(id())
            }),
            Some(TodoAction::DestroyTodo { id: id() })
        );
        assert_eq!(
            bind(UiEvent::FocusOut {
                target: Target::Edit(id()),
                value: "ignored".to_string()
            }),
            Some(TodoAction::CommitEdit)
        );
    }

    #[test]
    fn footer_and_routing() {
        assert_eq!(
            bind(UiEvent::Click {
                target: Target::ClearCompleted
            }),
            Some(TodoAction::ClearCompleted)
        );
        assert_eq!(
            bind(UiEvent::HashChange {
                fragment: "#/active".to_string()
            }),
            Some(TodoAction::Navigate {
                fragment: "#/active".to_string()
            })
        );
    }

    #[test]
    fn unlisted_combinations_bind_nothing() {
        assert_eq!(bind(UiEvent::Click { target: Target::NewTodo }), None);
        assert_eq!(
            bind(UiEvent::DoubleClick {
                target: Target::Toggle(id())
            }),
            None
        );
        assert_eq!(
            bind(UiEvent::Change {
                target: Target::Label(id()),
                checked: true
            }),
            None
        );
        assert_eq!(
            bind(UiEvent::Input {
                target: Target::NewTodo,
                value: "x".to_string()
            }),
            None
        );
    }
}
