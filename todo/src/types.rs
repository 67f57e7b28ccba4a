//! State and actions for the todo feature.
//!
//! The feature state is a read-only projection of the persistent store (the
//! live subscription keeps it fresh) plus the transient draft used by the
//! add/edit flows. Nothing in here touches storage directly; all I/O happens
//! in effects returned by the reducer.

use composable_todo_persistence::types::{TodoId, TodoItem};
use serde::{Deserialize, Serialize};

/// Transient add/edit form state.
///
/// A draft is never persisted: it becomes a create or update only when the
/// user saves, and is discarded on cancel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// The todo being edited, or `None` when adding a new one
    pub target: Option<TodoId>,
    /// Title text being entered
    pub title: String,
    /// Completion flag being entered
    pub complete: bool,
}

impl Draft {
    /// Creates an empty draft for the add flow
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft prefilled from an existing item for the edit flow
    #[must_use]
    pub fn from_item(item: &TodoItem) -> Self {
        Self {
            target: Some(item.id),
            title: item.title.clone(),
            complete: item.complete,
        }
    }

    /// Returns true if this draft edits an existing todo
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.target.is_some()
    }
}

/// State of the todo list feature
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListState {
    /// Current snapshot of the store, sorted by title ascending
    pub todos: Vec<TodoItem>,
    /// Open add/edit draft, if any
    pub draft: Option<Draft>,
    /// Last operation error, surfaced transiently to the user
    pub last_error: Option<String>,
}

impl TodoListState {
    /// Creates an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of listed todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.complete).count()
    }

    /// Returns a listed todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }
}

/// User intents and effect feedback for the todo feature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== User intents ==========
    /// The list view appeared; start the live subscription
    ViewAppeared,
    /// Open an empty add draft
    AddButtonTapped,
    /// Open a draft prefilled from the given todo
    EditButtonTapped {
        /// Todo to edit
        id: TodoId,
    },
    /// The draft title text changed
    DraftTitleChanged(String),
    /// The draft completion toggle changed
    DraftCompleteChanged(bool),
    /// Discard the open draft
    CancelButtonTapped,
    /// Persist the open draft (create or update)
    SaveButtonTapped,
    /// Flip the completion flag of the given todo
    ToggleCompleteTapped {
        /// Todo to toggle
        id: TodoId,
    },
    /// Delete the given todo
    DeleteTapped {
        /// Todo to delete
        id: TodoId,
    },
    /// Dismiss the transient error banner
    ErrorDismissed,

    // ========== Effect feedback ==========
    /// The live subscription delivered a fresh snapshot
    TodosLoaded(Vec<TodoItem>),
    /// The open draft was persisted successfully
    DraftSaved,
    /// A persistence operation failed
    OperationFailed {
        /// Human-readable error description
        error: String,
    },
}
