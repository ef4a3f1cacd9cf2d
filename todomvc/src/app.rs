//! The view controller: owns the store and turns events into views.

use crate::bindings::{bind, UiEvent};
use crate::config::Config;
use crate::error::AppError;
use crate::persistence;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::render::{render, View};
use crate::router::Route;
use crate::storage::FileStorage;
use crate::types::{TodoAction, TodoId, TodoState};
use std::sync::Arc;
use todomvc_core::environment::{KeyValueStorage, MemoryStorage, UuidGenerator};
use todomvc_core::storage::StorageError;
use todomvc_runtime::Store;

/// Store type driving the application
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// A running todo application
///
/// Every [`dispatch`](Self::dispatch) completes its reduce, persist and
/// render cycle before returning.
#[derive(Clone)]
pub struct TodoApp {
    store: TodoStore,
}

impl TodoApp {
    /// Open the application described by `config`
    ///
    /// Loads the item list from the configured storage (an unreadable slot
    /// starts empty) and applies the initial route.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the storage directory cannot be created.
    pub fn open(config: &Config) -> Result<Self, AppError> {
        let storage: Arc<dyn KeyValueStorage> = if config.ephemeral {
            tracing::info!("Using in-memory storage");
            Arc::new(MemoryStorage::new())
        } else {
            if let Some(dir) = config.storage_path.parent() {
                if !dir.as_os_str().is_empty() {
                    std::fs::create_dir_all(dir).map_err(StorageError::from)?;
                }
            }
            tracing::info!(path = %config.storage_path.display(), "Using file storage");
            Arc::new(FileStorage::new(&config.storage_path))
        };

        let env = TodoEnvironment::new(storage, Arc::new(UuidGenerator), &config.namespace);
        Ok(Self::with_environment(env, Route::parse(&config.initial_route)))
    }

    /// Open the application configured by the process environment
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if a variable holds an unusable value, or
    /// [`AppError::Storage`] if the storage directory cannot be created.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Config::from_env()?;
        tracing::debug!(?config, "Loaded configuration");
        Self::open(&config)
    }

    /// Start from the items held in `env`'s storage, on `route`
    #[must_use]
    pub fn with_environment(env: TodoEnvironment, route: Route) -> Self {
        let todos = persistence::load(env.storage.as_ref(), &env.namespace);
        tracing::info!(
            namespace = %env.namespace,
            count = todos.len(),
            route = %route.fragment(),
            "Opened todo list"
        );
        let state = TodoState::restored(todos, route);
        Self {
            store: Store::new(state, TodoReducer::new(), env),
        }
    }

    /// Handle a UI event and return the updated view
    ///
    /// Events with no binding leave the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store has been shut down.
    pub async fn dispatch(&self, event: UiEvent) -> Result<View, AppError> {
        if let Some(action) = bind(event) {
            self.send(action).await?;
        }
        Ok(self.view().await)
    }

    /// Send an action directly, bypassing the event bindings
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store has been shut down.
    pub async fn send(&self, action: TodoAction) -> Result<(), AppError> {
        self.store.send(action).await?;
        Ok(())
    }

    /// Render the current state
    pub async fn view(&self) -> View {
        self.store.state(render).await
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> TodoState {
        self.store.state(TodoState::clone).await
    }

    /// Id of the `n`th visible item, counting from 1
    pub async fn visible_id(&self, n: usize) -> Option<TodoId> {
        let index = n.checked_sub(1)?;
        self.store
            .state(|s| s.visible().nth(index).map(|item| item.id.clone()))
            .await
    }

    /// Id of the item open for editing
    pub async fn editing_id(&self) -> Option<TodoId> {
        self.store
            .state(|s| s.editing.as_ref().map(|session| session.id.clone()))
            .await
    }

    /// Stop accepting events
    pub fn close(&self) {
        self.store.shutdown();
    }
}
