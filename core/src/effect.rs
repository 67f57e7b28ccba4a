//! Effect descriptions returned by reducers.
//!
//! Effects are NOT executed immediately. They are descriptions of what should
//! happen, returned from reducers and executed by the Store runtime. This keeps
//! reducers pure and testable: a test can assert on the returned effects
//! without performing any I/O.

use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A long-lived source of actions.
///
/// Used for standing subscriptions such as the live todo list: the stream
/// yields an action for every snapshot the persistence layer delivers, and
/// the runtime feeds each one back into the reducer. The effect ends when
/// the stream does.
pub type ActionStream<Action> = Pin<Box<dyn Stream<Item = Action> + Send>>;

/// Effect type - describes a side effect to be executed
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Run effects in parallel
    Parallel(Vec<Effect<Action>>),

    /// Run effects sequentially
    Sequential(Vec<Effect<Action>>),

    /// Delayed action (for debounce-style flows)
    Delay {
        /// How long to wait
        duration: Duration,
        /// Action to dispatch after delay
        action: Box<Action>,
    },

    /// Arbitrary one-shot async computation
    ///
    /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),

    /// Long-lived subscription yielding actions over time
    ///
    /// Each item is fed back into the reducer as it arrives. The runtime
    /// keeps the subscription alive until the stream ends or the store
    /// shuts down.
    Stream(ActionStream<Action>),
}

// Manual Debug implementation since Future and Stream don't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Parallel(effects) => {
                f.debug_tuple("Effect::Parallel").field(effects).finish()
            },
            Effect::Sequential(effects) => {
                f.debug_tuple("Effect::Sequential").field(effects).finish()
            },
            Effect::Delay { duration, action } => f
                .debug_struct("Effect::Delay")
                .field("duration", duration)
                .field("action", action)
                .finish(),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            Effect::Stream(_) => write!(f, "Effect::Stream(<stream>)"),
        }
    }
}

impl<Action> Effect<Action> {
    /// Combine effects to run in parallel
    #[must_use]
    pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Parallel(effects)
    }

    /// Chain effects to run sequentially
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }

    /// Wrap an async computation as a one-shot effect
    pub fn future<F>(fut: F) -> Effect<Action>
    where
        F: Future<Output = Option<Action>> + Send + 'static,
    {
        Effect::Future(Box::pin(fut))
    }

    /// Wrap a stream of actions as a long-lived subscription effect
    pub fn stream<S>(stream: S) -> Effect<Action>
    where
        S: Stream<Item = Action> + Send + 'static,
    {
        Effect::Stream(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Ping,
    }

    #[test]
    fn debug_formatting() {
        let none: Effect<TestAction> = Effect::None;
        assert_eq!(format!("{none:?}"), "Effect::None");

        let fut = Effect::future(async { Some(TestAction::Ping) });
        assert_eq!(format!("{fut:?}"), "Effect::Future(<future>)");

        let stream = Effect::stream(futures::stream::iter([TestAction::Ping]));
        assert_eq!(format!("{stream:?}"), "Effect::Stream(<stream>)");
    }

    #[test]
    fn merge_produces_parallel() {
        let effect: Effect<TestAction> = Effect::merge(vec![Effect::None, Effect::None]);
        assert!(matches!(effect, Effect::Parallel(ref effects) if effects.len() == 2));
    }

    #[test]
    fn chain_produces_sequential() {
        let effect: Effect<TestAction> = Effect::chain(vec![Effect::None]);
        assert!(matches!(effect, Effect::Sequential(ref effects) if effects.len() == 1));
    }

    #[tokio::test]
    async fn future_effect_resolves_to_action() {
        let effect = Effect::future(async { Some(TestAction::Ping) });
        let Effect::Future(fut) = effect else {
            unreachable!("constructed a Future effect");
        };
        assert_eq!(fut.await, Some(TestAction::Ping));
    }
}
