//! The Reducer trait - core abstraction for business logic.
//!
//! Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
//! They contain all business logic and are deterministic and testable.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected dependencies this reducer needs
///
/// # Example
///
/// ```ignore
/// impl Reducer for TodoReducer {
///     type State = TodoListState;
///     type Action = TodoAction;
///     type Environment = TodoEnvironment;
///
///     fn reduce(
///         &self,
///         state: &mut TodoListState,
///         action: TodoAction,
///         env: &TodoEnvironment,
///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
///         match action {
///             TodoAction::ViewAppeared => {
///                 // Subscribe to the live todo list
///                 smallvec::smallvec![subscribe_effect(env)]
///             }
///             _ => SmallVec::new(),
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects
    ///
    /// This is a pure function that:
    /// 1. Validates the action
    /// 2. Updates state in place
    /// 3. Returns effect descriptions to be executed
    ///
    /// # Returns
    ///
    /// The effects to be executed by the runtime. Most actions produce none,
    /// hence the inline capacity of four.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
