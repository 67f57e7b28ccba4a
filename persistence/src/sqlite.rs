//! SQLite implementation of the [`TodoStore`] contract.
//!
//! Backed by `rusqlite` with the bundled SQLite library, driven through
//! `tokio-rusqlite`'s single background connection thread. The single
//! connection serializes mutations, which gives the contract's last-write-wins
//! semantics without any extra locking.
//!
//! Snapshots for live subscribers ride on a `tokio::sync::watch` channel:
//! every committed mutation recomputes the ordered listing and publishes it
//! before the operation returns.

use crate::store::{validate_title, TodoSnapshots, TodoStore, TodoStoreError};
use crate::types::{NewTodo, TodoId, TodoItem, TodoUpdate};
use rusqlite::params;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use tokio::sync::watch;
use tokio_rusqlite::Connection;
use uuid::Uuid;

/// SQLite-backed todo store.
///
/// Open a durable store with [`SqliteTodoStore::open`] or an in-memory one
/// (previews, tests) with [`SqliteTodoStore::in_memory`].
pub struct SqliteTodoStore {
    conn: Connection,
    snapshots: watch::Sender<Vec<TodoItem>>,
}

fn storage(err: tokio_rusqlite::Error) -> TodoStoreError {
    TodoStoreError::Storage(err.to_string())
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<TodoItem> {
    let raw: String = row.get(0)?;
    let id = Uuid::parse_str(&raw).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(TodoItem {
        id: TodoId::from_uuid(id),
        title: row.get(1)?,
        complete: row.get(2)?,
    })
}

impl SqliteTodoStore {
    /// Opens (or creates) a durable store at the given file path.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Storage`] if the database cannot be opened
    /// or the schema cannot be initialized.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TodoStoreError> {
        let conn = Connection::open(path.as_ref()).await.map_err(storage)?;
        Self::with_connection(conn).await
    }

    /// Opens a purely in-memory store (previews and tests).
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Storage`] if the database cannot be opened
    /// or the schema cannot be initialized.
    pub async fn in_memory() -> Result<Self, TodoStoreError> {
        let conn = Connection::open_in_memory().await.map_err(storage)?;
        Self::with_connection(conn).await
    }

    async fn with_connection(conn: Connection) -> Result<Self, TodoStoreError> {
        init_schema(&conn).await.map_err(storage)?;
        let initial = fetch_all(&conn).await?;
        let (snapshots, _) = watch::channel(initial);
        Ok(Self { conn, snapshots })
    }

    /// Recomputes the listing and publishes it to live subscribers.
    async fn publish(&self) -> Result<(), TodoStoreError> {
        let items = fetch_all(&self.conn).await?;
        tracing::debug!(count = items.len(), "Publishing todo snapshot");
        self.snapshots.send_replace(items);
        Ok(())
    }
}

async fn init_schema(conn: &Connection) -> tokio_rusqlite::Result<()> {
    conn.call(|conn| {
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA busy_timeout=5000;

            CREATE TABLE IF NOT EXISTS todos (
                id       TEXT PRIMARY KEY,
                title    TEXT NOT NULL,
                complete INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_todos_title ON todos(title);
            ",
        )?;
        Ok(())
    })
    .await
}

async fn fetch_all(conn: &Connection) -> Result<Vec<TodoItem>, TodoStoreError> {
    conn.call(|conn| {
        let mut stmt =
            conn.prepare("SELECT id, title, complete FROM todos ORDER BY title ASC")?;
        let rows = stmt.query_map([], |row| row_to_item(row))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    })
    .await
    .map_err(storage)
}

impl TodoStore for SqliteTodoStore {
    fn list(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<TodoItem>, TodoStoreError>> + Send + '_>> {
        Box::pin(fetch_all(&self.conn))
    }

    fn subscribe(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<TodoSnapshots, TodoStoreError>> + Send + '_>> {
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

    fn create(
        &self,
        todo: NewTodo,
    ) -> Pin<Box<dyn Future<Output = Result<(), TodoStoreError>> + Send + '_>> {
        Box::pin(async move {
            validate_title(&todo.title)?;

            let id = todo.id.to_string();
            let title = todo.title;
            let complete = todo.complete;
            tracing::debug!(%id, "Creating todo");

            self.conn
                .call(move |conn| {
                    conn.execute(
                        "INSERT INTO todos (id, title, complete) VALUES (?1, ?2, ?3)",
                        params![id, title, complete],
                    )?;
                    Ok(())
                })
                .await
                .map_err(storage)?;

            self.publish().await
        })
    }

    fn update(
        &self,
        id: TodoId,
        update: TodoUpdate,
    ) -> Pin<Box<dyn Future<Output = Result<(), TodoStoreError>> + Send + '_>> {
        Box::pin(async move {
            if !update.has_updates() {
                return Ok(());
            }
            if let Some(title) = &update.title {
                validate_title(title)?;
            }

            let key = id.to_string();
            tracing::debug!(id = %key, ?update, "Updating todo");

            let changed = self
                .conn
                .call(move |conn| {
                    let changed = match (update.title, update.complete) {
                        (Some(title), Some(complete)) => conn.execute(
                            "UPDATE todos SET title = ?2, complete = ?3 WHERE id = ?1",
                            params![key, title, complete],
                        )?,
                        (Some(title), None) => conn.execute(
                            "UPDATE todos SET title = ?2 WHERE id = ?1",
                            params![key, title],
                        )?,
                        (None, Some(complete)) => conn.execute(
                            "UPDATE todos SET complete = ?2 WHERE id = ?1",
                            params![key, complete],
                        )?,
                        (None, None) => 0,
                    };
                    Ok(changed)
                })
                .await
                .map_err(storage)?;

            if changed == 0 {
                return Err(TodoStoreError::NotFound(id));
            }
            self.publish().await
        })
    }

    fn toggle_complete(
        &self,
        id: TodoId,
    ) -> Pin<Box<dyn Future<Output = Result<(), TodoStoreError>> + Send + '_>> {
        Box::pin(async move {
            let key = id.to_string();
            tracing::debug!(id = %key, "Toggling todo completion");

            let changed = self
                .conn
                .call(move |conn| {
                    Ok(conn.execute(
                        "UPDATE todos SET complete = 1 - complete WHERE id = ?1",
                        params![key],
                    )?)
                })
                .await
                .map_err(storage)?;

            if changed == 0 {
                return Err(TodoStoreError::NotFound(id));
            }
            self.publish().await
        })
    }

    fn delete(
        &self,
        id: TodoId,
    ) -> Pin<Box<dyn Future<Output = Result<(), TodoStoreError>> + Send + '_>> {
        Box::pin(async move {
            let key = id.to_string();
            tracing::debug!(id = %key, "Deleting todo");

            let changed = self
                .conn
                .call(move |conn| {
                    Ok(conn.execute("DELETE FROM todos WHERE id = ?1", params![key])?)
                })
                .await
                .map_err(storage)?;

            if changed == 0 {
                return Err(TodoStoreError::NotFound(id));
            }
            self.publish().await
        })
    }
}
