//! # TodoMVC Core
//!
//! Core traits and types for the composable TodoMVC architecture.
//!
//! This crate provides the fundamental abstractions the application is built
//! from: a pure update function over an explicit state container, with every
//! side effect described as a value and executed by the runtime.
//!
//! ## Core Concepts
//!
//! - **State**: The explicit state container for a feature
//! - **Action**: Every input the feature reacts to (user intent, effect feedback)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies (storage, id generation)
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_core::*;
//!
//! impl Reducer for TodoReducer {
//!     type State = TodoState;
//!     type Action = TodoAction;
//!     type Environment = TodoEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TodoState,
//!         action: TodoAction,
//!         env: &TodoEnvironment,
//!     ) -> SmallVec<[Effect<TodoAction>; 4]> {
//!         state.todos = apply(std::mem::take(&mut state.todos), action);
//!         smallvec![set_item! {
//!             storage: env.storage,
//!             key: env.namespace,
//!             value: encode(&state.todos),
//!             on_error: |e| Some(TodoAction::PersistFailed { error: e.to_string() })
//!         }]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use smallvec::{smallvec, SmallVec};

/// Key-value storage abstraction (local storage semantics)
pub mod storage;

/// Declarative macros for building effects
#[macro_use]
pub mod effect_macros;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodoState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
    ///         match action {
    ///             TodoAction::ClearCompleted => {
    ///                 // Business logic here
    ///                 SmallVec::new()
    ///             }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Interprets the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution), so a reducer stays a pure function.
pub mod effect {
    use crate::storage::{KeyValueStorage, StorageError};
    use std::sync::Arc;

    /// Callback invoked when a storage write fails
    pub type StorageErrorHandler<Action> = Box<dyn FnOnce(StorageError) -> Option<Action> + Send>;

    /// Callback invoked with the outcome of a storage read
    pub type StorageReadHandler<Action> =
        Box<dyn FnOnce(Result<Option<String>, StorageError>) -> Option<Action> + Send>;

    /// Storage operations executed by the runtime
    ///
    /// Each operation carries the storage handle it runs against, so the
    /// runtime needs no knowledge of the environment.
    pub enum StorageOperation<Action> {
        /// Overwrite the value held under `key`
        SetItem {
            /// Storage to write to
            storage: Arc<dyn KeyValueStorage>,
            /// Slot name
            key: String,
            /// Serialized value
            value: String,
            /// Maps a write failure to an optional feedback action
            on_error: StorageErrorHandler<Action>,
        },

        /// Read the value held under `key`
        GetItem {
            /// Storage to read from
            storage: Arc<dyn KeyValueStorage>,
            /// Slot name
            key: String,
            /// Maps the read result to an optional feedback action
            on_complete: StorageReadHandler<Action>,
        },
    }

    impl<Action> std::fmt::Debug for StorageOperation<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::SetItem { key, value, .. } => f
                    .debug_struct("StorageOperation::SetItem")
                    .field("key", key)
                    .field("value_len", &value.len())
                    .finish_non_exhaustive(),
                Self::GetItem { key, .. } => f
                    .debug_struct("StorageOperation::GetItem")
                    .field("key", key)
                    .finish_non_exhaustive(),
            }
        }
    }

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// Key-value storage access
        Storage(StorageOperation<Action>),
    }

    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::Storage(op) => f.debug_tuple("Effect::Storage").field(op).finish(),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Returns true if this is a storage write against `key`
        #[must_use]
        pub fn writes_key(&self, key: &str) -> bool {
            matches!(
                self,
                Effect::Storage(StorageOperation::SetItem { key: k, .. }) if k == key
            )
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    pub use crate::storage::{KeyValueStorage, MemoryStorage};

    /// Id generator trait - abstracts identity creation for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - random UUIDs
    /// let ids = UuidGenerator;
    ///
    /// // Test - predictable ids
    /// let ids = SequentialIdGenerator::new("todo");
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce a new identifier, unique for the lifetime of the data
        fn next_id(&self) -> String;
    }

    /// Random v4 UUID identifiers
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> String {
            uuid::Uuid::new_v4().to_string()
        }
    }
}
