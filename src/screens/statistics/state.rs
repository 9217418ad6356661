//! View state of the statistics screen.

use super::{StatisticsResult, TaskCounts};
use crate::mvi::{Outcome, ViewError};

/// Immutable snapshot rendered by the statistics screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsViewState {
    /// Counting is running.
    pub is_loading: bool,
    /// Number of active tasks.
    pub active_count: usize,
    /// Number of completed tasks.
    pub completed_count: usize,
    /// Last failure, if any.
    pub error: Option<ViewError>,
}

impl StatisticsViewState {
    /// State shown before anything has been counted.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            is_loading: false,
            active_count: 0,
            completed_count: 0,
            error: None,
        }
    }

    /// Folds one result into the state.
    #[must_use]
    pub fn reduce(self, result: StatisticsResult) -> Self {
        let StatisticsResult::Load(outcome) = result;
        match outcome {
            Outcome::InFlight => Self {
                is_loading: true,
                ..self
            },
            Outcome::Success(TaskCounts { active, completed }) => Self {
                is_loading: false,
                active_count: active,
                completed_count: completed,
                error: None,
            },
            Outcome::Failure(error) => Self {
                is_loading: false,
                error: Some(error),
                ..self
            },
        }
    }
}

impl Default for StatisticsViewState {
    fn default() -> Self {
        Self::idle()
    }
}
