//! # TodoMVC Runtime
//!
//! Runtime implementation for the composable TodoMVC architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to the reducer
//!
//! ## Execution Model
//!
//! `Store::send` runs to completion: the reducer runs under the state lock,
//! then every effect it returned is executed in order, and any action an
//! effect produces is reduced in turn before `send` returns. A caller that
//! re-renders after `send` therefore always observes persisted state.
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use todomvc_core::{
    effect::{Effect, StorageOperation},
    reducer::Reducer,
};
use tokio::sync::RwLock;

/// Metric names and descriptions
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        Arc, AtomicBool, Effect, Ordering, Reducer, RwLock, StorageOperation, StoreError,
        VecDeque,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, the single owner of application state)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoState::default(), TodoReducer::new(), env);
    ///
    /// store.send(TodoAction::CreateTodo {
    ///     title: "Buy milk".to_string(),
    /// }).await?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + std::fmt::Debug + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
            }
        }

        /// Stop accepting actions
        ///
        /// Every `send()` issued afterwards fails with
        /// [`StoreError::ShutdownInProgress`]. Since effects run inline,
        /// nothing is left pending once the in-flight `send()` returns.
        pub fn shutdown(&self) {
            tracing::info!("Store shutting down");
            self.shutdown.store(true, Ordering::Release);
        }

        /// Returns true once `shutdown()` has been called
        #[must_use]
        pub fn is_shut_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }

        /// Send an action to the store
        ///
        /// Reduces the action, executes the resulting effects in order, and
        /// reduces any feedback actions they produce, all before returning.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        ///
        /// # Example
        ///
        /// ```ignore
        /// store.send(TodoAction::ToggleAll { completed: true }).await?;
        /// ```
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            if self.is_shut_down() {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!(crate::metrics::REJECTED_ACTIONS).increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let mut queue = VecDeque::from([action]);

            while let Some(action) = queue.pop_front() {
                tracing::debug!(?action, "Processing action");
                metrics::counter!(crate::metrics::ACTIONS_TOTAL).increment(1);

                let effects = {
                    let mut state = self.state.write().await;
                    tracing::trace!("Acquired write lock on state");

                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                    metrics::histogram!(crate::metrics::REDUCER_DURATION)
                        .record(start.elapsed().as_secs_f64());

                    tracing::trace!("Reducer completed, returned {} effects", effects.len());
                    effects
                };

                Self::execute_effects(effects, &mut queue);
            }

            tracing::debug!("Action processing completed");
            Ok(())
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let remaining = store.state(|s| s.todos.active_count()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Execute effects in order, queueing any feedback actions
        fn execute_effects(
            effects: impl IntoIterator<Item = Effect<A>>,
            feedback: &mut VecDeque<A>,
        ) {
            for effect in effects {
                match effect {
                    Effect::Storage(op) => {
                        metrics::counter!(crate::metrics::EFFECTS_EXECUTED, "type" => "storage")
                            .increment(1);
                        if let Some(action) = Self::execute_storage(op) {
                            tracing::trace!("Storage operation produced an action");
                            feedback.push_back(action);
                        }
                    },
                }
            }
        }

        fn execute_storage(op: StorageOperation<A>) -> Option<A> {
            match op {
                StorageOperation::SetItem {
                    storage,
                    key,
                    value,
                    on_error,
                } => {
                    tracing::debug!(key = %key, bytes = value.len(), "Executing set_item");
                    match storage.set_item(&key, &value) {
                        Ok(()) => None,
                        Err(error) => {
                            tracing::warn!(key = %key, error = %error, "set_item failed");
                            metrics::counter!(crate::metrics::STORAGE_FAILURES).increment(1);
                            on_error(error)
                        },
                    }
                },
                StorageOperation::GetItem {
                    storage,
                    key,
                    on_complete,
                } => {
                    tracing::debug!(key = %key, "Executing get_item");
                    let result = storage.get_item(&key);
                    if let Err(error) = &result {
                        tracing::warn!(key = %key, error = %error, "get_item failed");
                        metrics::counter!(crate::metrics::STORAGE_FAILURES).increment(1);
                    }
                    on_complete(result)
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
