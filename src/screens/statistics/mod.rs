//! Statistics screen: counts of active and completed tasks.

mod processor;
mod state;

pub use processor::StatisticsActionProcessor;
pub use state::StatisticsViewState;

use crate::mvi::{Outcome, ScreenContract};
use crate::task::domain::Task;

/// Events entering the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsIntent {
    /// The screen was shown for the first time.
    Initial,
}

/// Commands executed by [`StatisticsActionProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsAction {
    /// Count the tasks in the store.
    LoadStatistics,
}

/// Task counts produced by a statistics load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    /// Tasks still to be done.
    pub active: usize,
    /// Tasks already done.
    pub completed: usize,
}

impl TaskCounts {
    /// Counts active and completed tasks.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            active: tasks.len() - completed,
            completed,
        }
    }
}

/// Outcomes folded into [`StatisticsViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsResult {
    /// Progress of counting the tasks.
    Load(Outcome<TaskCounts>),
}

/// Contract of the statistics screen.
#[derive(Debug)]
pub struct StatisticsScreen;

impl ScreenContract for StatisticsScreen {
    type Intent = StatisticsIntent;
    type Action = StatisticsAction;
    type Result = StatisticsResult;
    type State = StatisticsViewState;

    fn is_initial_intent(intent: &StatisticsIntent) -> bool {
        matches!(intent, StatisticsIntent::Initial)
    }

    fn action_from_intent(intent: StatisticsIntent) -> Option<StatisticsAction> {
        match intent {
            StatisticsIntent::Initial => Some(StatisticsAction::LoadStatistics),
        }
    }

    fn is_load_action(_action: &StatisticsAction) -> bool {
        true
    }

    fn initial_state() -> StatisticsViewState {
        StatisticsViewState::idle()
    }

    fn reduce(state: StatisticsViewState, result: StatisticsResult) -> StatisticsViewState {
        state.reduce(result)
    }
}
