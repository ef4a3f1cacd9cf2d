//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todomvc_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Several actions may be queued with repeated `when_action` calls; they are
/// reduced in order and the effect assertions see the effects of the last one.
///
/// # Example
///
/// ```ignore
/// use todomvc_testing::ReducerTest;
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(test_environment())
///     .given_state(TodoState::default())
///     .when_action(TodoAction::CreateTodo { title: "A".into() })
///     .when_action(TodoAction::CreateTodo { title: "B".into() })
///     .then_state(|state| {
///         assert_eq!(state.todos.len(), 2);
///     })
///     .then_effects(|effects| {
///         assert_eq!(effects.len(), 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Queue an action to reduce (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the effects of the last action (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        let mut effects = Vec::new();
        for action in self.actions {
            effects = self.reducer.reduce(&mut state, action, &env).into_vec();
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use todomvc_core::effect::{Effect, StorageOperation};

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.is_empty(),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects contain a storage write to `key` and return its value
    ///
    /// # Panics
    ///
    /// Panics if no `SetItem` effect targets `key`.
    #[allow(clippy::panic)] // Test assertion
    #[must_use]
    pub fn assert_writes_key<'a, A>(effects: &'a [Effect<A>], key: &str) -> &'a str {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::Storage(StorageOperation::SetItem { key: k, value, .. }) if k == key => {
                    Some(value.as_str())
                },
                _ => None,
            })
            .unwrap_or_else(|| panic!("Expected a storage write to {key:?}, but none found"))
    }

    /// Assert that effects contain no storage writes at all
    ///
    /// # Panics
    ///
    /// Panics if any `SetItem` effect is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_storage_writes<A>(effects: &[Effect<A>]) {
        assert!(
            !effects.iter().any(|effect| matches!(
                effect,
                Effect::Storage(StorageOperation::SetItem { .. })
            )),
            "Expected no storage writes"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use todomvc_core::effect::{Effect, StorageOperation};
    use todomvc_core::reducer::Reducer;
    use todomvc_core::storage::MemoryStorage;
    use todomvc_core::{smallvec, SmallVec};

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Save,
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    SmallVec::new()
                },
                TestAction::Decrement => {
                    state.count -= 1;
                    SmallVec::new()
                },
                TestAction::Save => smallvec![Effect::Storage(StorageOperation::SetItem {
                    storage: Arc::new(MemoryStorage::new()),
                    key: "count".to_string(),
                    value: state.count.to_string(),
                    on_error: Box::new(|_| None),
                })],
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_action_sequence() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Save)
            .then_state(|state| {
                assert_eq!(state.count, 3);
            })
            .then_effects(|effects| {
                assert_eq!(assertions::assert_writes_key(effects, "count"), "3");
            })
            .run();
    }

    fn read(key: &str) -> Effect<TestAction> {
        Effect::Storage(StorageOperation::GetItem {
            storage: Arc::new(MemoryStorage::new()),
            key: key.to_string(),
            on_complete: Box::new(|_| None),
        })
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<TestAction>(&[]);
        assertions::assert_no_storage_writes::<TestAction>(&[]);
        assertions::assert_no_storage_writes(&[read("count")]);
    }

    #[test]
    fn test_assertions_effects_count() {
        assertions::assert_effects_count(&[read("a"), read("b")], 2);
        assertions::assert_effects_count::<TestAction>(&[], 0);
    }
}
