//! Mock implementations for testing.
//!
//! [`InMemoryTodoStore`] satisfies the full [`TodoStore`] contract with the
//! same validation, ordering, and subscription semantics as the SQLite
//! backend, so reducer tests exercise realistic adapter behavior without a
//! database. [`FailingTodoStore`] fails every operation, for error-path
//! tests. [`SequentialIdGenerator`] makes generated identifiers predictable.

use composable_todo_core::environment::IdGenerator;
use composable_todo_persistence::store::{
    validate_title, TodoSnapshots, TodoStore, TodoStoreError,
};
use composable_todo_persistence::types::{NewTodo, TodoId, TodoItem, TodoUpdate};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

/// Deterministic id generator for tests.
///
/// Generates `Uuid`s from an incrementing counter, so the ids a reducer
/// produces are predictable.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the id that `generate` would produce on its nth call (1-based).
    #[must_use]
    pub const fn nth(n: u64) -> Uuid {
        Uuid::from_u128(n as u128)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::SeqCst)))
    }
}

/// Convenience constructor for a shared sequential id generator.
#[must_use]
pub fn sequential_ids() -> Arc<SequentialIdGenerator> {
    Arc::new(SequentialIdGenerator::new())
}

type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TodoStoreError>> + Send + 'a>>;

/// In-memory todo store for tests.
///
/// Behavior matches the SQLite backend: titles are validated the same way,
/// listings are sorted by title ascending, and every committed mutation
/// publishes a fresh snapshot to subscribers.
pub struct InMemoryTodoStore {
    todos: RwLock<HashMap<TodoId, TodoItem>>,
    snapshots: watch::Sender<Vec<TodoItem>>,
}

impl InMemoryTodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Vec::new());
        Self {
            todos: RwLock::new(HashMap::new()),
            snapshots,
        }
    }

    async fn sorted(&self) -> Vec<TodoItem> {
        let todos = self.todos.read().await;
        let mut items: Vec<_> = todos.values().cloned().collect();
        // Tie-break on id to keep snapshots deterministic for equal titles
        items.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        items
    }

    async fn publish(&self) {
        let items = self.sorted().await;
        self.snapshots.send_replace(items);
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for InMemoryTodoStore {
    fn list(&self) -> StoreFuture<'_, Vec<TodoItem>> {
        Box::pin(async move { Ok(self.sorted().await) })
    }

    fn subscribe(&self) -> StoreFuture<'_, TodoSnapshots> {
        let mut rx = self.snapshots.subscribe();
        Box::pin(async move {
            let stream = async_stream::stream! {
                loop {
                    let snapshot = rx.borrow_and_update().clone();
                    yield snapshot;
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            };
            Ok(Box::pin(stream) as TodoSnapshots)
        })
    }

    fn create(&self, todo: NewTodo) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            validate_title(&todo.title)?;
            let item = TodoItem {
                id: todo.id,
                title: todo.title,
                complete: todo.complete,
            };
            self.todos.write().await.insert(item.id, item);
            self.publish().await;
            Ok(())
        })
    }

    fn update(&self, id: TodoId, update: TodoUpdate) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            if !update.has_updates() {
                return Ok(());
            }
            if let Some(title) = &update.title {
                validate_title(title)?;
            }

            {
                let mut todos = self.todos.write().await;
                let item = todos.get_mut(&id).ok_or(TodoStoreError::NotFound(id))?;
                if let Some(title) = update.title {
                    item.title = title;
                }
                if let Some(complete) = update.complete {
                    item.complete = complete;
                }
            }
            self.publish().await;
            Ok(())
        })
    }

    fn toggle_complete(&self, id: TodoId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            {
                let mut todos = self.todos.write().await;
                let item = todos.get_mut(&id).ok_or(TodoStoreError::NotFound(id))?;
                item.complete = !item.complete;
            }
            self.publish().await;
            Ok(())
        })
    }

    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            {
                let mut todos = self.todos.write().await;
                if todos.remove(&id).is_none() {
                    return Err(TodoStoreError::NotFound(id));
                }
            }
            self.publish().await;
            Ok(())
        })
    }
}

/// Todo store whose every operation fails with a storage error.
///
/// Useful for asserting that reducers surface persistence failures as
/// recoverable error state instead of crashing.
#[derive(Debug, Default)]
pub struct FailingTodoStore;

impl FailingTodoStore {
    fn fail<T>() -> StoreFuture<'static, T>
    where
        T: Send + 'static,
    {
        Box::pin(async {
            Err(TodoStoreError::Storage(
                "storage backend unavailable".to_string(),
            ))
        })
    }
}

impl TodoStore for FailingTodoStore {
    fn list(&self) -> StoreFuture<'_, Vec<TodoItem>> {
        Self::fail()
    }

    fn subscribe(&self) -> StoreFuture<'_, TodoSnapshots> {
        Self::fail()
    }

    fn create(&self, _todo: NewTodo) -> StoreFuture<'_, ()> {
        Self::fail()
    }

    fn update(&self, _id: TodoId, _update: TodoUpdate) -> StoreFuture<'_, ()> {
        Self::fail()
    }

    fn toggle_complete(&self, _id: TodoId) -> StoreFuture<'_, ()> {
        Self::fail()
    }

    fn delete(&self, _id: TodoId) -> StoreFuture<'_, ()> {
        Self::fail()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use futures::StreamExt;

    #[test]
    fn sequential_ids_are_predictable() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate(), SequentialIdGenerator::nth(1));
        assert_eq!(ids.generate(), SequentialIdGenerator::nth(2));
    }

    #[test]
    fn default_generator_never_yields_nil() {
        let ids = SequentialIdGenerator::default();
        let first = ids.generate();
        assert!(!first.is_nil());
        assert_eq!(first, SequentialIdGenerator::nth(1));
    }

    #[tokio::test]
    async fn in_memory_store_matches_adapter_contract() {
        let store = InMemoryTodoStore::new();
        let id = TodoId::new();

        store.create(NewTodo::new(id, "bravo")).await.unwrap();
        store
            .create(NewTodo::new(TodoId::new(), "alpha"))
            .await
            .unwrap();

        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["alpha", "bravo"]);

        store.toggle_complete(id).await.unwrap();
        store.toggle_complete(id).await.unwrap();
        let items = store.list().await.unwrap();
        assert!(!items.iter().find(|t| t.id == id).unwrap().complete);

        store.delete(id).await.unwrap();
        assert_eq!(
            store.delete(id).await,
            Err(TodoStoreError::NotFound(id))
        );
    }

    #[tokio::test]
    async fn in_memory_store_publishes_snapshots() {
        let store = InMemoryTodoStore::new();
        let mut snapshots = store.subscribe().await.unwrap();
        assert!(snapshots.next().await.unwrap().is_empty());

        store
            .create(NewTodo::new(TodoId::new(), "Buy milk"))
            .await
            .unwrap();
        assert_eq!(snapshots.next().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failing_store_fails_everything() {
        let store = FailingTodoStore;
        assert!(matches!(
            store.list().await,
            Err(TodoStoreError::Storage(_))
        ));
        assert!(matches!(
            store.create(NewTodo::new(TodoId::new(), "x")).await,
            Err(TodoStoreError::Storage(_))
        ));
    }
}
