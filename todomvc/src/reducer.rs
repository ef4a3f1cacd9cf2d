//! Reducer logic for the todo list.
//!
//! Every `#[mutation]` action rewrites the item list and then describes a
//! save of the whole list as a storage effect. View actions touch only the
//! route and the edit session.

use crate::persistence;
use crate::router::Route;
use crate::types::{EditSession, TodoAction, TodoId, TodoItem, TodoState};
use std::sync::Arc;
use todomvc_core::environment::{IdGenerator, KeyValueStorage};
use todomvc_core::{effect::Effect, get_item, reducer::Reducer, set_item, smallvec, SmallVec};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Where the item list is persisted
    pub storage: Arc<dyn KeyValueStorage>,
    /// Source of item identifiers
    pub ids: Arc<dyn IdGenerator>,
    /// Storage slot holding the item list
    pub namespace: String,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        ids: Arc<dyn IdGenerator>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            ids,
            namespace: namespace.into(),
        }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies a list-changing action to state
    fn apply_mutation(state: &mut TodoState, action: TodoAction, env: &TodoEnvironment) {
        let todos = std::mem::take(&mut state.todos);
        state.todos = match action {
            TodoAction::CreateTodo { title } => {
                let title = title.trim();
                if title.is_empty() {
                    todos
                } else {
                    todos.with_created(TodoItem::new(TodoId::new(env.ids.next_id()), title))
                }
            },
            TodoAction::ToggleTodo { id } => todos.with_toggled(&id),
            TodoAction::ToggleAll { completed } => todos.with_all_completed(completed),
            TodoAction::UpdateTitle { id, title } => todos.with_title(&id, &title),
            TodoAction::DestroyTodo { id } => todos.without(&id),
            TodoAction::ClearCompleted => {
                state.route = Route::default();
                todos.without_completed()
            },
            _ => todos,
        };

        Self::close_stale_edit(state);
        state.last_error = None;
    }

    /// An edit on an item that no longer exists is over
    fn close_stale_edit(state: &mut TodoState) {
        if state
            .editing
            .as_ref()
            .is_some_and(|session| state.todos.get(&session.id).is_none())
        {
            state.editing = None;
        }
    }

    /// Describes a save of the whole list
    fn persist(state: &TodoState, env: &TodoEnvironment) -> SmallVec<[Effect<TodoAction>; 4]> {
        match persistence::encode(&state.todos) {
            Ok(value) => smallvec![set_item! {
                storage: env.storage,
                key: env.namespace,
                value: value,
                on_error: |error| Some(TodoAction::PersistFailed { error: error.to_string() })
            }],
            Err(error) => {
                tracing::warn!(%error, "Failed to encode todos, skipping save");
                SmallVec::new()
            },
        }
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(action = action.action_name(), "Reducing todo action");

        if action.is_mutation() {
            Self::apply_mutation(state, action, env);
            return Self::persist(state, env);
        }

        match action {
            // ========== Edit session ==========
            TodoAction::StartEditing { id } => {
                // Moving to another row blurs the open edit field
                let effects = if state.editing.as_ref().is_some_and(|session| session.id != id) {
                    self.reduce(state, TodoAction::CommitEdit, env)
                } else {
                    SmallVec::new()
                };
                if let Some(item) = state.todos.get(&id) {
                    state.editing = Some(EditSession {
                        draft: item.title.clone(),
                        id,
                    });
                }
                effects
            },

            TodoAction::EditDraftChanged { draft } => {
                if let Some(session) = &mut state.editing {
                    session.draft = draft;
                }
                SmallVec::new()
            },

            TodoAction::CommitEdit => match state.editing.take() {
                Some(EditSession { id, draft }) => {
                    self.reduce(state, TodoAction::UpdateTitle { id, title: draft }, env)
                },
                None => SmallVec::new(),
            },

            TodoAction::CancelEdit => {
                state.editing = None;
                SmallVec::new()
            },

            // ========== Routing ==========
            TodoAction::Navigate { fragment } => {
                state.route = Route::parse(&fragment);
                SmallVec::new()
            },

            // ========== Storage ==========
            TodoAction::Reload => smallvec![get_item! {
                storage: env.storage,
                key: env.namespace,
                on_complete: |result| Some(TodoAction::ItemsLoaded {
                    items: persistence::from_read(result),
                })
            }],

            TodoAction::ItemsLoaded { items } => {
                state.todos = items;
                Self::close_stale_edit(state);
                SmallVec::new()
            },

            TodoAction::PersistFailed { error } => {
                tracing::warn!(%error, "Failed to save todos");
                state.last_error = Some(error);
                SmallVec::new()
            },

            // Handled above
            TodoAction::CreateTodo { .. }
            | TodoAction::ToggleTodo { .. }
            | TodoAction::ToggleAll { .. }
            | TodoAction::UpdateTitle { .. }
            | TodoAction::DestroyTodo { .. }
            | TodoAction::ClearCompleted => SmallVec::new(),
        }
    }
}
