//! The persistence adapter contract.
//!
//! [`TodoStore`] is the only external boundary of the application. Any
//! backend that satisfies the contract can stand in: the production SQLite
//! store, or the in-memory store in the testing crate.
//!
//! # Design
//!
//! The trait uses explicit `Pin<Box<dyn Future>>` returns instead of
//! `async fn` so it stays object-safe - reducers hold it as
//! `Arc<dyn TodoStore>`.
//!
//! # Live subscription
//!
//! `subscribe` returns a standing query: the current ordered snapshot is
//! delivered immediately, and a recomputed snapshot follows every committed
//! mutation made through the same store. The stream ends when the store is
//! dropped.

use crate::types::{NewTodo, TodoId, TodoItem, TodoUpdate};
use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Maximum accepted todo title length, in bytes
pub const MAX_TITLE_LEN: usize = 500;

/// Errors that can occur during store operations.
///
/// All CRUD operations return one of these instead of terminating the
/// process; callers surface them as transient, retryable error state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoStoreError {
    /// The referenced todo does not exist (or was already deleted)
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// The request was rejected before touching storage
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The underlying storage operation failed
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Stream of ordered todo snapshots from a live subscription.
pub type TodoSnapshots = Pin<Box<dyn Stream<Item = Vec<TodoItem>> + Send>>;

/// Boxed future returned by store operations.
type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TodoStoreError>> + Send + 'a>>;

/// Validates a todo title.
///
/// Shared by every backend so validation behavior cannot drift between the
/// production store and test doubles.
///
/// # Errors
///
/// Returns [`TodoStoreError::Validation`] for empty (after trim) or
/// over-long titles.
pub fn validate_title(title: &str) -> Result<(), TodoStoreError> {
    if title.trim().is_empty() {
        return Err(TodoStoreError::Validation(
            "Todo title cannot be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(TodoStoreError::Validation(format!(
            "Todo title too long (max {MAX_TITLE_LEN} bytes)"
        )));
    }
    Ok(())
}

/// The persistence adapter contract for todo items.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the store is shared between the
/// reducer environment and long-lived subscription effects.
pub trait TodoStore: Send + Sync {
    /// Returns the current collection, sorted by title ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Storage`] if the read fails.
    fn list(&self) -> StoreFuture<'_, Vec<TodoItem>>;

    /// Opens a live subscription over the collection.
    ///
    /// The current snapshot is delivered immediately; a fresh snapshot
    /// follows every committed mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Storage`] if the subscription cannot be
    /// established.
    fn subscribe(&self) -> StoreFuture<'_, TodoSnapshots>;

    /// Persists a new todo.
    ///
    /// # Errors
    ///
    /// - [`TodoStoreError::Validation`] if the title is empty or too long
    /// - [`TodoStoreError::Storage`] if the write fails
    fn create(&self, todo: NewTodo) -> StoreFuture<'_, ()>;

    /// Applies the provided fields to an existing todo.
    ///
    /// An update with no fields set is a no-op and always succeeds.
    ///
    /// # Errors
    ///
    /// - [`TodoStoreError::NotFound`] if the id is unknown
    /// - [`TodoStoreError::Validation`] if a new title is empty or too long
    /// - [`TodoStoreError::Storage`] if the write fails
    fn update(&self, id: TodoId, update: TodoUpdate) -> StoreFuture<'_, ()>;

    /// Flips the completion flag of an existing todo and persists it.
    ///
    /// # Errors
    ///
    /// - [`TodoStoreError::NotFound`] if the id is unknown
    /// - [`TodoStoreError::Storage`] if the write fails
    fn toggle_complete(&self, id: TodoId) -> StoreFuture<'_, ()>;

    /// Removes a todo; subsequent listings omit it.
    ///
    /// # Errors
    ///
    /// - [`TodoStoreError::NotFound`] if the id is unknown
    /// - [`TodoStoreError::Storage`] if the write fails
    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()>;
}
