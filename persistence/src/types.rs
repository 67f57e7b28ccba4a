//! Domain types for the todo feature.
//!
//! A todo is deliberately minimal: an opaque stable identifier, a title, and
//! a completion flag. The persistent store owns the items; everything the
//! rest of the application sees is a read-only projection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TodoId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single persisted todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, stable across edits
    pub id: TodoId,
    /// Title of the todo
    pub title: String,
    /// Whether the todo is completed
    pub complete: bool,
}

impl TodoItem {
    /// Creates a new incomplete todo item
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            complete: false,
        }
    }
}

/// Payload for creating a todo
///
/// The caller supplies the identifier so that creation stays deterministic
/// under an injected id generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Identifier for the new todo
    pub id: TodoId,
    /// Title of the new todo
    pub title: String,
    /// Initial completion flag (defaults to false)
    pub complete: bool,
}

impl NewTodo {
    /// Creates a payload for a new incomplete todo
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            complete: false,
        }
    }

    /// Sets the initial completion flag
    #[must_use]
    pub const fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }
}

/// Partial update for a todo item
///
/// Only the provided fields are applied; an update with neither field set
/// is a no-op at the store level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoUpdate {
    /// New title, if changing
    pub title: Option<String>,
    /// New completion flag, if changing
    pub complete: Option<bool>,
}

impl TodoUpdate {
    /// Creates an empty update
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            complete: None,
        }
    }

    /// Sets the title to apply
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the completion flag to apply
    #[must_use]
    pub const fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    /// Returns true if at least one field would be applied
    #[must_use]
    pub const fn has_updates(&self) -> bool {
        self.title.is_some() || self.complete.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display_round_trips() {
        let id = TodoId::new();
        let display = format!("{id}");
        assert_eq!(display, id.as_uuid().to_string());
    }

    #[test]
    fn todo_item_new_is_incomplete() {
        let id = TodoId::new();
        let item = TodoItem::new(id, "Buy milk");
        assert_eq!(item.id, id);
        assert_eq!(item.title, "Buy milk");
        assert!(!item.complete);
    }

    #[test]
    fn new_todo_defaults_to_incomplete() {
        let todo = NewTodo::new(TodoId::new(), "Write docs");
        assert!(!todo.complete);
        assert!(NewTodo::new(TodoId::new(), "x").with_complete(true).complete);
    }

    #[test]
    fn empty_update_has_no_updates() {
        assert!(!TodoUpdate::new().has_updates());
        assert!(TodoUpdate::new().title("a").has_updates());
        assert!(TodoUpdate::new().complete(true).has_updates());
    }
}
