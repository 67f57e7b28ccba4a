//! Todo list application built on the Composable Todo architecture.
//!
//! This crate wires the feature together:
//!
//! - State, actions, and draft handling ([`types`])
//! - The reducer and its environment ([`reducer`])
//!
//! The persistent store feeds the feature through a live subscription: once
//! `ViewAppeared` is sent, every committed mutation redelivers an ordered
//! snapshot as `TodosLoaded`, so the projection in state never goes stale.
//!
//! # Quick Start
//!
//! ```no_run
//! use composable_todo_persistence::SqliteTodoStore;
//! use composable_todo_core::environment::UuidGenerator;
//! use composable_todo_runtime::Store;
//! use std::sync::Arc;
//! use todo_app::{TodoAction, TodoEnvironment, TodoListState, TodoReducer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let todos = Arc::new(SqliteTodoStore::in_memory().await?);
//! let env = TodoEnvironment::new(todos, Arc::new(UuidGenerator));
//! let store = Store::new(TodoListState::new(), TodoReducer::new(), env);
//!
//! // Start the live subscription, then add a todo through the draft flow
//! store.send(TodoAction::ViewAppeared).await?;
//! store.send(TodoAction::AddButtonTapped).await?;
//! store.send(TodoAction::DraftTitleChanged("Buy milk".to_string())).await?;
//! store.send(TodoAction::SaveButtonTapped).await?;
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Draft, TodoAction, TodoListState};
