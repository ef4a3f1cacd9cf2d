//! Domain types for the todo list.
//!
//! The list is an ordered sequence of items kept in insertion order. List
//! operations consume the list and return the new one, so the reducer swaps
//! whole values rather than poking at shared fields.

use crate::router::Route;
use serde::{Deserialize, Serialize};
use todomvc_macros::Action;

/// Opaque identifier of a todo item
///
/// Generated once at creation; persisted data may carry any string here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, incomplete todo item
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Which items the list displays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// Every filter, in footer order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns true if `item` is shown under this filter
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    /// The route segment naming this filter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Footer link label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Parse a route segment; `None` if it names no filter
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == segment)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered todo items
///
/// Lookups by id are linear scans; lists are user-typed and short.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<TodoItem>);

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.0.iter()
    }

    /// Items shown under `filter`, in insertion order
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &TodoItem> {
        self.0.iter().filter(move |item| filter.matches(item))
    }

    /// Position of the item with `id`
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.0.iter().position(|item| &item.id == id)
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.0.iter().find(|item| &item.id == id)
    }

    /// Number of incomplete items
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|item| !item.completed).count()
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|item| item.completed).count()
    }

    /// Returns true if no item is left to do (vacuously true when empty)
    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.active_count() == 0
    }

    /// Appends `item`
    #[must_use]
    pub fn with_created(mut self, item: TodoItem) -> Self {
        self.0.push(item);
        self
    }

    /// Flips `completed` on the item with `id`
    #[must_use]
    pub fn with_toggled(mut self, id: &TodoId) -> Self {
        if let Some(i) = self.position(id) {
            self.0[i].completed = !self.0[i].completed;
        }
        self
    }

    /// Sets `completed` on every item
    #[must_use]
    pub fn with_all_completed(mut self, completed: bool) -> Self {
        for item in &mut self.0 {
            item.completed = completed;
        }
        self
    }

    /// Replaces the title of the item with `id`; a blank title removes it
    #[must_use]
    pub fn with_title(mut self, id: &TodoId, title: &str) -> Self {
        let title = title.trim();
        if title.is_empty() {
            return self.without(id);
        }
        if let Some(i) = self.position(id) {
            title.clone_into(&mut self.0[i].title);
        }
        self
    }

    /// Removes the item with `id`
    #[must_use]
    pub fn without(mut self, id: &TodoId) -> Self {
        if let Some(i) = self.position(id) {
            self.0.remove(i);
        }
        self
    }

    /// Removes every completed item
    #[must_use]
    pub fn without_completed(mut self) -> Self {
        self.0.retain(|item| !item.completed);
        self
    }

    /// Consumes the list, returning the items
    #[must_use]
    pub fn into_vec(self) -> Vec<TodoItem> {
        self.0
    }
}

impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An item open for inline editing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Item being edited
    pub id: TodoId,
    /// In-progress text, seeded from the item's title
    pub draft: String,
}

/// State of the todo application
///
/// The single container the Store owns. Only `todos` is persisted; the route
/// comes from the URL fragment and the edit session is transient.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// All todos, in insertion order
    pub todos: TodoList,
    /// Current route (drives the filter)
    pub route: Route,
    /// Open inline edit, if any
    pub editing: Option<EditSession>,
    /// Last persistence failure (if any)
    pub last_error: Option<String>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State rehydrated from storage and the URL
    #[must_use]
    pub fn restored(todos: TodoList, route: Route) -> Self {
        Self {
            todos,
            route,
            ..Self::default()
        }
    }

    /// The active filter
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.route.filter()
    }

    /// Items shown under the active filter
    pub fn visible(&self) -> impl Iterator<Item = &TodoItem> {
        self.todos.filtered(self.filter())
    }
}

/// Actions the todo reducer understands
///
/// `#[mutation]` actions change the item list and are persisted after
/// reduction; `#[view]` actions only touch transient state. Unmarked variants
/// are feedback from effects.
#[derive(Action, Clone, Debug, PartialEq)]
pub enum TodoAction {
    /// Append a new item (blank titles are ignored)
    #[mutation]
    CreateTodo {
        /// Raw input text
        title: String,
    },

    /// Flip an item's completed flag
    #[mutation]
    ToggleTodo {
        /// Item to toggle
        id: TodoId,
    },

    /// Set every item's completed flag
    #[mutation]
    ToggleAll {
        /// New flag for every item
        completed: bool,
    },

    /// Replace an item's title (blank deletes the item)
    #[mutation]
    UpdateTitle {
        /// Item to rename
        id: TodoId,
        /// Raw new title
        title: String,
    },

    /// Remove an item
    #[mutation]
    DestroyTodo {
        /// Item to remove
        id: TodoId,
    },

    /// Remove every completed item and show all
    #[mutation]
    ClearCompleted,

    /// Open inline editing on an item
    #[view]
    StartEditing {
        /// Item to edit
        id: TodoId,
    },

    /// The inline edit field changed
    #[view]
    EditDraftChanged {
        /// Current field text
        draft: String,
    },

    /// Apply the open edit
    #[view]
    CommitEdit,

    /// Discard the open edit
    #[view]
    CancelEdit,

    /// The URL fragment changed
    #[view]
    Navigate {
        /// New fragment, e.g. `#/active`
        fragment: String,
    },

    /// Re-read the item list from storage
    #[view]
    Reload,

    /// Feedback: items read from storage
    ItemsLoaded {
        /// Items read (empty when the slot was absent or unreadable)
        items: TodoList,
    },

    /// Feedback: a storage write failed
    PersistFailed {
        /// Error message
        error: String,
    },
}
