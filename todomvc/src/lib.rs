//! TodoMVC on the composable reducer architecture.
//!
//! A single ordered todo list with a URL-fragment filter, persisted to one
//! key-value storage slot after every change:
//!
//! - [`types`]: items, the list, filters, state and actions
//! - [`reducer`]: the one `reduce` function and its environment
//! - [`persistence`]: the item list in a storage slot
//! - [`storage`]: JSON-file storage
//! - [`router`]: fragment parsing
//! - [`render`]: state to view model, HTML and text
//! - [`bindings`]: UI events to actions
//! - [`app`]: the controller tying them together
//! - [`shell`]: the line-oriented terminal front end
//!
//! # Quick Start
//!
//! ```no_run
//! use todomvc::{Key, Route, Target, TodoApp, TodoEnvironment, UiEvent};
//! use todomvc_core::environment::{MemoryStorage, UuidGenerator};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), todomvc::AppError> {
//! let env = TodoEnvironment::new(
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(UuidGenerator),
//!     "todos-composable",
//! );
//! let app = TodoApp::with_environment(env, Route::default());
//!
//! let view = app
//!     .dispatch(UiEvent::KeyUp {
//!         target: Target::NewTodo,
//!         key: Key::Enter,
//!         value: "Buy milk".to_string(),
//!     })
//!     .await?;
//!
//! println!("{view}");
//! println!("{}", view.to_html());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod bindings;
pub mod config;
pub mod error;
pub mod persistence;
pub mod reducer;
pub mod render;
pub mod router;
pub mod shell;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use app::TodoApp;
pub use bindings::{bind, Key, Target, UiEvent};
pub use config::{Config, ConfigError};
pub use error::AppError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use render::{render, View};
pub use router::Route;
pub use storage::FileStorage;
pub use types::{EditSession, Filter, TodoAction, TodoId, TodoItem, TodoList, TodoState};
