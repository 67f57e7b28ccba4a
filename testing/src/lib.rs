//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the Composable Todo architecture.
//!
//! This crate provides:
//! - Mock implementations of the persistence adapter and environment traits
//! - A fluent Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::{mocks, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoListState::new())
//!     .when_action(TodoAction::AddButtonTapped)
//!     .then_state(|state| assert!(state.draft.is_some()))
//!     .run();
//! ```

pub mod mocks;
pub mod reducer_test;

pub use mocks::{sequential_ids, FailingTodoStore, InMemoryTodoStore, SequentialIdGenerator};
pub use reducer_test::{assertions, ReducerTest};
