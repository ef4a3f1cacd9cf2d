//! # TodoMVC Testing
//!
//! Testing utilities and helpers for the composable TodoMVC architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Property-based testing strategies
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_testing::{ReducerTest, SequentialIdGenerator};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoState::default())
//!     .when_action(TodoAction::CreateTodo { title: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.todos.len(), 1))
//!     .run();
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use todomvc_core::environment::IdGenerator;

/// Ergonomic reducer testing (Given-When-Then)
pub mod reducer_test;

/// Storage doubles: failing and write-recording storages
pub mod storage_mocks;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{AtomicUsize, IdGenerator, Ordering};

    /// Predictable id generator for deterministic tests
    ///
    /// Produces `{prefix}-1`, `{prefix}-2`, ... in order.
    ///
    /// # Example
    ///
    /// ```
    /// use todomvc_testing::mocks::SequentialIdGenerator;
    /// use todomvc_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new("todo");
    /// assert_eq!(ids.next_id(), "todo-1");
    /// assert_eq!(ids.next_id(), "todo-2");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: String,
        next: AtomicUsize,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose ids start at `{prefix}-1`
        #[must_use]
        pub fn new(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                next: AtomicUsize::new(1),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new("todo")
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::Relaxed);
            format!("{}-{n}", self.prefix)
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Titles a user might type: non-blank text, optionally padded with whitespace
    pub fn title() -> impl Strategy<Value = String> {
        ("[ \t]{0,2}", "[a-zA-Z0-9<>&\"' ]{0,12}[a-zA-Z0-9<>&]", "[ \t]{0,2}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Input that trims to nothing
    pub fn blank_title() -> impl Strategy<Value = String> {
        "[ \t\n]{0,4}"
    }

    /// Either a real title or blank input, weighted towards real titles
    pub fn any_title() -> impl Strategy<Value = String> {
        prop_oneof![4 => title(), 1 => blank_title()]
    }
}

// Re-export commonly used items
pub use mocks::SequentialIdGenerator;
pub use reducer_test::{assertions, ReducerTest};
pub use storage_mocks::{FailingStorage, RecordingStorage};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("item");
        assert_eq!(ids.next_id(), "item-1");
        assert_eq!(ids.next_id(), "item-2");
    }

    proptest! {
        #[test]
        fn titles_never_trim_to_empty(title in properties::title()) {
            prop_assert!(!title.trim().is_empty());
        }

        #[test]
        fn blank_titles_always_trim_to_empty(title in properties::blank_title()) {
            prop_assert!(title.trim().is_empty());
        }
    }
}
