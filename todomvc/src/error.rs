//! Application error type.

use crate::config::ConfigError;
use thiserror::Error;
use todomvc_core::storage::StorageError;
use todomvc_runtime::StoreError;

/// Errors surfaced by [`TodoApp`](crate::app::TodoApp)
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Storage could not be set up
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The store refused an action
    #[error(transparent)]
    Store(#[from] StoreError),
}
