//! Integration tests for the SQLite todo store.
//!
//! These run against an in-memory database and exercise the full adapter
//! contract: CRUD semantics, the error taxonomy, title ordering, and the
//! live subscription.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use composable_todo_persistence::sqlite::SqliteTodoStore;
use composable_todo_persistence::store::{TodoStore, TodoStoreError, MAX_TITLE_LEN};
use composable_todo_persistence::types::{NewTodo, TodoId, TodoUpdate};
use futures::StreamExt;

async fn store() -> SqliteTodoStore {
    SqliteTodoStore::in_memory()
        .await
        .expect("in-memory store opens")
}

#[tokio::test]
async fn create_then_list_yields_exactly_that_item() {
    let store = store().await;
    let id = TodoId::new();

    store.create(NewTodo::new(id, "Buy milk")).await.unwrap();

    let todos = store.list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].title, "Buy milk");
    assert!(!todos[0].complete);
}

#[tokio::test]
async fn listing_is_sorted_by_title_ascending() {
    let store = store().await;
    for title in ["charlie", "alpha", "bravo"] {
        store.create(NewTodo::new(TodoId::new(), title)).await.unwrap();
    }

    let titles: Vec<_> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["alpha", "bravo", "charlie"]);
}

#[tokio::test]
async fn create_rejects_empty_title() {
    let store = store().await;
    let result = store.create(NewTodo::new(TodoId::new(), "   ")).await;
    assert!(matches!(result, Err(TodoStoreError::Validation(_))));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_over_long_title() {
    let store = store().await;
    let title = "x".repeat(MAX_TITLE_LEN + 1);
    let result = store.create(NewTodo::new(TodoId::new(), title)).await;
    assert!(matches!(result, Err(TodoStoreError::Validation(_))));
}

#[tokio::test]
async fn delete_removes_from_subsequent_listings() {
    let store = store().await;
    let id = TodoId::new();
    store.create(NewTodo::new(id, "Buy milk")).await.unwrap();

    store.delete(id).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let store = store().await;
    let id = TodoId::new();
    assert_eq!(store.delete(id).await, Err(TodoStoreError::NotFound(id)));
}

#[tokio::test]
async fn toggle_unknown_id_is_not_found() {
    let store = store().await;
    let id = TodoId::new();
    assert_eq!(
        store.toggle_complete(id).await,
        Err(TodoStoreError::NotFound(id))
    );
}

#[tokio::test]
async fn double_toggle_restores_original_completion() {
    let store = store().await;
    let id = TodoId::new();
    store.create(NewTodo::new(id, "Buy milk")).await.unwrap();

    store.toggle_complete(id).await.unwrap();
    assert!(store.list().await.unwrap()[0].complete);

    store.toggle_complete(id).await.unwrap();
    assert!(!store.list().await.unwrap()[0].complete);
}

#[tokio::test]
async fn title_only_update_leaves_completion_unchanged() {
    let store = store().await;
    let id = TodoId::new();
    store
        .create(NewTodo::new(id, "Buy milk").with_complete(true))
        .await
        .unwrap();

    store
        .update(id, TodoUpdate::new().title("Buy oat milk"))
        .await
        .unwrap();

    let todos = store.list().await.unwrap();
    assert_eq!(todos[0].title, "Buy oat milk");
    assert!(todos[0].complete);
}

#[tokio::test]
async fn completion_only_update_leaves_title_unchanged() {
    let store = store().await;
    let id = TodoId::new();
    store.create(NewTodo::new(id, "Buy milk")).await.unwrap();

    store
        .update(id, TodoUpdate::new().complete(true))
        .await
        .unwrap();

    let todos = store.list().await.unwrap();
    assert_eq!(todos[0].title, "Buy milk");
    assert!(todos[0].complete);
}

#[tokio::test]
async fn empty_update_is_a_no_op_even_for_unknown_ids() {
    let store = store().await;
    assert_eq!(store.update(TodoId::new(), TodoUpdate::new()).await, Ok(()));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = store().await;
    let id = TodoId::new();
    assert_eq!(
        store.update(id, TodoUpdate::new().title("x")).await,
        Err(TodoStoreError::NotFound(id))
    );
}

#[tokio::test]
async fn identifier_is_stable_across_edits() {
    let store = store().await;
    let id = TodoId::new();
    store.create(NewTodo::new(id, "Buy milk")).await.unwrap();

    store
        .update(id, TodoUpdate::new().title("Buy bread").complete(true))
        .await
        .unwrap();

    assert_eq!(store.list().await.unwrap()[0].id, id);
}

#[tokio::test]
async fn subscription_delivers_initial_and_updated_snapshots() {
    let store = store().await;
    let mut snapshots = store.subscribe().await.unwrap();

    let initial = snapshots.next().await.unwrap();
    assert!(initial.is_empty());

    let id = TodoId::new();
    store.create(NewTodo::new(id, "Buy milk")).await.unwrap();
    let after_create = snapshots.next().await.unwrap();
    assert_eq!(after_create.len(), 1);
    assert_eq!(after_create[0].title, "Buy milk");

    store.delete(id).await.unwrap();
    let after_delete = snapshots.next().await.unwrap();
    assert!(after_delete.is_empty());
}

#[tokio::test]
async fn end_to_end_scenario() {
    let store = store().await;
    let id = TodoId::new();

    store.create(NewTodo::new(id, "Buy milk")).await.unwrap();
    let todos = store.list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "Buy milk");
    assert!(!todos[0].complete);

    store.toggle_complete(id).await.unwrap();
    assert!(store.list().await.unwrap()[0].complete);

    store.delete(id).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn durable_store_survives_reopen() {
    let dir = std::env::temp_dir().join(format!("composable-todo-{}", TodoId::new()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("todos.db");

    let id = TodoId::new();
    {
        let store = SqliteTodoStore::open(&path).await.unwrap();
        store.create(NewTodo::new(id, "Buy milk")).await.unwrap();
    }

    let reopened = SqliteTodoStore::open(&path).await.unwrap();
    let todos = reopened.list().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);

    let _ = std::fs::remove_dir_all(&dir);
}
