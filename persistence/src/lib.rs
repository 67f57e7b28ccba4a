//! SQLite-backed persistence adapter for the Composable Todo architecture.
//!
//! This crate owns the todo domain types and the [`store::TodoStore`] trait -
//! the only external boundary of the application. The production backend is
//! [`sqlite::SqliteTodoStore`], an embedded SQLite database (durable or
//! in-memory). All CRUD operations surface recoverable [`store::TodoStoreError`]
//! values instead of terminating the process, and every committed mutation
//! publishes a fresh ordered snapshot to live subscribers.
//!
//! # Example
//!
//! ```no_run
//! use composable_todo_persistence::sqlite::SqliteTodoStore;
//! use composable_todo_persistence::store::TodoStore;
//! use composable_todo_persistence::types::NewTodo;
//! use composable_todo_persistence::types::TodoId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteTodoStore::in_memory().await?;
//! store.create(NewTodo::new(TodoId::new(), "Buy milk")).await?;
//! let todos = store.list().await?;
//! assert_eq!(todos[0].title, "Buy milk");
//! # Ok(())
//! # }
//! ```

pub mod sqlite;
pub mod store;
pub mod types;

pub use sqlite::SqliteTodoStore;
pub use store::{TodoSnapshots, TodoStore, TodoStoreError};
pub use types::{NewTodo, TodoId, TodoItem, TodoUpdate};
