//! Reducer logic for the todo feature.
//!
//! The reducer validates user intents, updates the in-memory projection, and
//! describes persistence work as effects. All storage failures come back as
//! `OperationFailed` feedback and land in `state.last_error` - a failed save
//! keeps the draft open so the user can retry.

use crate::types::{Draft, TodoAction, TodoListState};
use composable_todo_core::environment::IdGenerator;
use composable_todo_core::{effect::Effect, reducer::Reducer, SmallVec};
use composable_todo_persistence::store::TodoStore;
use composable_todo_persistence::types::{NewTodo, TodoId, TodoUpdate};
use futures::StreamExt;
use std::sync::Arc;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Persistence adapter
    pub store: Arc<dyn TodoStore>,
    /// Generator for fresh todo identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }
}

/// Reducer for the todo feature
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Long-lived subscription to the store's snapshot stream.
///
/// Each snapshot feeds back as `TodosLoaded`; a failed subscribe surfaces
/// once as `OperationFailed` and the effect ends.
fn subscribe_effect(store: Arc<dyn TodoStore>) -> Effect<TodoAction> {
    Effect::stream(async_stream::stream! {
        match store.subscribe().await {
            Ok(mut snapshots) => {
                while let Some(todos) = snapshots.next().await {
                    yield TodoAction::TodosLoaded(todos);
                }
            },
            Err(error) => {
                yield TodoAction::OperationFailed {
                    error: error.to_string(),
                };
            },
        }
    })
}

/// One-shot persistence call; `Ok` maps to `on_success`, errors to
/// `OperationFailed`.
fn persist_effect<F>(fut: F, on_success: Option<TodoAction>) -> Effect<TodoAction>
where
    F: std::future::Future<Output = Result<(), composable_todo_persistence::TodoStoreError>>
        + Send
        + 'static,
{
    Effect::future(async move {
        match fut.await {
            Ok(()) => on_success,
            Err(error) => Some(TodoAction::OperationFailed {
                error: error.to_string(),
            }),
        }
    })
}

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per user intent
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== User intents ==========
            TodoAction::ViewAppeared => {
                smallvec::smallvec![subscribe_effect(Arc::clone(&env.store))]
            },

            TodoAction::AddButtonTapped => {
                state.draft = Some(Draft::new());
                SmallVec::new()
            },

            TodoAction::EditButtonTapped { id } => {
                match state.get(id) {
                    Some(item) => {
                        state.draft = Some(Draft::from_item(item));
                    },
                    None => {
                        state.last_error = Some(format!("Todo not found: {id}"));
                    },
                }
                SmallVec::new()
            },

            TodoAction::DraftTitleChanged(title) => {
                if let Some(draft) = state.draft.as_mut() {
                    draft.title = title;
                }
                SmallVec::new()
            },

            TodoAction::DraftCompleteChanged(complete) => {
                if let Some(draft) = state.draft.as_mut() {
                    draft.complete = complete;
                }
                SmallVec::new()
            },

            TodoAction::CancelButtonTapped => {
                state.draft = None;
                SmallVec::new()
            },

            TodoAction::SaveButtonTapped => {
                let Some(draft) = state.draft.clone() else {
                    return SmallVec::new();
                };

                if draft.title.trim().is_empty() {
                    // Invalid draft stays open for correction
                    state.last_error = Some("Todo title cannot be empty".to_string());
                    return SmallVec::new();
                }

                let store = Arc::clone(&env.store);
                let effect = match draft.target {
                    Some(id) => {
                        let update = TodoUpdate::new()
                            .title(draft.title)
                            .complete(draft.complete);
                        persist_effect(
                            async move { store.update(id, update).await },
                            Some(TodoAction::DraftSaved),
                        )
                    },
                    None => {
                        let todo = NewTodo::new(TodoId::from_uuid(env.ids.generate()), draft.title)
                            .with_complete(draft.complete);
                        persist_effect(
                            async move { store.create(todo).await },
                            Some(TodoAction::DraftSaved),
                        )
                    },
                };
                smallvec::smallvec![effect]
            },

            TodoAction::ToggleCompleteTapped { id } => {
                let store = Arc::clone(&env.store);
                smallvec::smallvec![persist_effect(
                    async move { store.toggle_complete(id).await },
                    None,
                )]
            },

            TodoAction::DeleteTapped { id } => {
                let store = Arc::clone(&env.store);
                smallvec::smallvec![persist_effect(async move { store.delete(id).await }, None)]
            },

            TodoAction::ErrorDismissed => {
                state.last_error = None;
                SmallVec::new()
            },

            // ========== Effect feedback ==========
            TodoAction::TodosLoaded(todos) => {
                state.todos = todos;
                SmallVec::new()
            },

            TodoAction::DraftSaved => {
                state.draft = None;
                state.last_error = None;
                SmallVec::new()
            },

            TodoAction::OperationFailed { error } => {
                tracing::warn!(%error, "Persistence operation failed");
                state.last_error = Some(error);
                SmallVec::new()
            },
        }
    }
}
