//! Traits describing a screen's pipeline.

use std::fmt::Debug;

use async_trait::async_trait;

use super::sink::ResultSink;

/// Types and pure functions that define one screen.
///
/// Implementors are usually unit structs; all behaviour lives in associated
/// functions so the runtime never needs an instance.
pub trait ScreenContract: Send + Sync + 'static {
    /// User or system event entering the screen.
    type Intent: Debug + Send + 'static;
    /// Command derived from an intent and executed by the processor.
    type Action: Debug + Send + 'static;
    /// Outcome of processing an action.
    type Result: Debug + Send + 'static;
    /// Immutable view state snapshot.
    type State: Debug + Clone + PartialEq + Send + Sync + 'static;

    /// Returns whether the intent is the screen's initial intent.
    ///
    /// Only the first initial intent reaching a screen model is honoured.
    fn is_initial_intent(intent: &Self::Intent) -> bool;

    /// Maps an intent to its action, or `None` when the intent is skipped.
    fn action_from_intent(intent: Self::Intent) -> Option<Self::Action>;

    /// Returns whether the action loads data for the screen.
    ///
    /// At most one load action runs per screen at a time.
    fn is_load_action(_action: &Self::Action) -> bool {
        false
    }

    /// Returns the state published before any result has been folded.
    fn initial_state() -> Self::State;

    /// Folds one result into the previous state.
    fn reduce(state: Self::State, result: Self::Result) -> Self::State;
}

/// Executes a screen's actions.
///
/// Every call emits an in-flight result first and then exactly one terminal
/// result. Processors may additionally schedule a delayed result, such as
/// hiding a transient notification.
#[async_trait]
pub trait ActionProcessor<C: ScreenContract>: Send + Sync + 'static {
    /// Processes one action, emitting its results into `results`.
    async fn process(&self, action: C::Action, results: ResultSink<C::Result>);
}
