//! CLI demo for the todo application.
//!
//! Drives the full stack - reducer, store runtime, and SQLite persistence -
//! through the same actions a UI would send. Set `TODO_DB` to choose the
//! database file (`:memory:` for an ephemeral run, default `todos.db`).

use anyhow::Context;
use composable_todo_core::environment::UuidGenerator;
use composable_todo_persistence::SqliteTodoStore;
use composable_todo_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use todo_app::{TodoAction, TodoEnvironment, TodoListState, TodoReducer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WAIT: Duration = Duration::from_secs(5);

fn render(state: &TodoListState) {
    if state.todos.is_empty() {
        println!("  (no todos)");
    }
    for todo in &state.todos {
        let status = if todo.complete { "✓" } else { " " };
        println!("  [{}] {}", status, todo.title);
    }
    if let Some(error) = &state.last_error {
        println!("  ! {error}");
    }
}

fn loaded(action: &TodoAction) -> bool {
    matches!(action, TodoAction::TodosLoaded(_) | TodoAction::OperationFailed { .. })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_app=info,composable_todo_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Composable Todo ===\n");

    let db = std::env::var("TODO_DB").unwrap_or_else(|_| "todos.db".to_string());
    let todos = if db == ":memory:" {
        SqliteTodoStore::in_memory().await
    } else {
        SqliteTodoStore::open(&db).await
    }
    .with_context(|| format!("opening todo database {db}"))?;

    let env = TodoEnvironment::new(Arc::new(todos), Arc::new(UuidGenerator));
    let store = Store::new(TodoListState::new(), TodoReducer::new(), env);

    // Start the live subscription; the first snapshot arrives immediately
    store
        .send_and_wait_for(TodoAction::ViewAppeared, loaded, WAIT)
        .await?;
    println!("Current todos:");
    store.state(render).await;

    // Add a todo through the draft flow
    println!("\nAdding 'Buy milk'...");
    store.send(TodoAction::AddButtonTapped).await?;
    store
        .send(TodoAction::DraftTitleChanged("Buy milk".to_string()))
        .await?;
    store
        .send_and_wait_for(TodoAction::SaveButtonTapped, loaded, WAIT)
        .await?;
    store.state(render).await;

    // Toggle it complete
    let first = store.state(|s| s.todos.first().map(|t| t.id)).await;
    if let Some(id) = first {
        println!("\nToggling the first todo...");
        store
            .send_and_wait_for(TodoAction::ToggleCompleteTapped { id }, loaded, WAIT)
            .await?;
        store.state(render).await;

        // Edit its title
        println!("\nRenaming it to 'Buy oat milk'...");
        store.send(TodoAction::EditButtonTapped { id }).await?;
        store
            .send(TodoAction::DraftTitleChanged("Buy oat milk".to_string()))
            .await?;
        store
            .send_and_wait_for(TodoAction::SaveButtonTapped, loaded, WAIT)
            .await?;
        store.state(render).await;

        // And delete it
        println!("\nDeleting it...");
        store
            .send_and_wait_for(TodoAction::DeleteTapped { id }, loaded, WAIT)
            .await?;
        store.state(render).await;
    }

    let (total, done) = store.state(|s| (s.count(), s.completed_count())).await;
    println!("\nCompleted: {done}/{total}");

    store.shutdown(WAIT).await?;
    println!("\n=== Done ===");
    Ok(())
}
