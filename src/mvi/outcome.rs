//! Tri-state outcome of one action.

use super::error::ViewError;
use crate::task::services::TaskStoreResult;

/// Progress of a single action: in flight, then succeeded or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The action has started and is waiting on the store.
    InFlight,
    /// The action finished with a payload.
    Success(T),
    /// The action failed; the marker is shown on the screen.
    Failure(ViewError),
}

impl<T> Outcome<T> {
    /// Converts a finished store call into its terminal outcome.
    #[must_use]
    pub fn settle(result: TaskStoreResult<T>) -> Self {
        result.map_or_else(|err| Self::Failure(ViewError::from(&err)), Self::Success)
    }
}
