//! Task list screen: loading, filtering and bulk updates.

mod processor;
mod state;

pub use processor::TasksActionProcessor;
pub use state::{TasksNotification, TasksViewState};

use crate::mvi::{Outcome, ScreenContract};
use crate::task::domain::{Task, TasksFilterType};

/// Events entering the task list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksIntent {
    /// The screen was shown for the first time.
    Initial,
    /// The user asked for fresh data.
    Refresh {
        /// Whether to bypass the cache and local store.
        force_update: bool,
    },
    /// The user marked a task as active.
    ActivateTask(Task),
    /// The user marked a task as completed.
    CompleteTask(Task),
    /// The user asked to remove every completed task.
    ClearCompletedTasks,
    /// The user picked a different filter.
    ChangeFilter(TasksFilterType),
}

/// Commands executed by [`TasksActionProcessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksAction {
    /// Load the task list.
    LoadTasks {
        /// Whether to bypass the cache and local store.
        force_update: bool,
        /// Filter to switch to, or `None` to keep the current one.
        filter: Option<TasksFilterType>,
    },
    /// Activate a task and reload the list.
    ActivateTask(Task),
    /// Complete a task and reload the list.
    CompleteTask(Task),
    /// Clear completed tasks and reload the list.
    ClearCompletedTasks,
}

/// Payload of a successful list load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTasks {
    /// Every task known to the store, unfiltered.
    pub tasks: Vec<Task>,
    /// Filter requested with the load, if any.
    pub filter: Option<TasksFilterType>,
}

/// Outcomes folded into [`TasksViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TasksResult {
    /// Progress of a list load.
    Load(Outcome<LoadedTasks>),
    /// Progress of activating a task; success carries the full list.
    Activate(Outcome<Vec<Task>>),
    /// Progress of completing a task; success carries the full list.
    Complete(Outcome<Vec<Task>>),
    /// Progress of clearing completed tasks; success carries the full list.
    ClearCompleted(Outcome<Vec<Task>>),
    /// A transient notification should be hidden.
    HideNotification(TasksNotification),
}

/// Contract of the task list screen.
#[derive(Debug)]
pub struct TasksScreen;

impl ScreenContract for TasksScreen {
    type Intent = TasksIntent;
    type Action = TasksAction;
    type Result = TasksResult;
    type State = TasksViewState;

    fn is_initial_intent(intent: &TasksIntent) -> bool {
        matches!(intent, TasksIntent::Initial)
    }

    fn action_from_intent(intent: TasksIntent) -> Option<TasksAction> {
        let action = match intent {
            TasksIntent::Initial => TasksAction::LoadTasks {
                force_update: true,
                filter: Some(TasksFilterType::All),
            },
            TasksIntent::Refresh { force_update } => TasksAction::LoadTasks {
                force_update,
                filter: None,
            },
            TasksIntent::ActivateTask(task) => TasksAction::ActivateTask(task),
            TasksIntent::CompleteTask(task) => TasksAction::CompleteTask(task),
            TasksIntent::ClearCompletedTasks => TasksAction::ClearCompletedTasks,
            TasksIntent::ChangeFilter(filter) => TasksAction::LoadTasks {
                force_update: false,
                filter: Some(filter),
            },
        };
        Some(action)
    }

    fn is_load_action(action: &TasksAction) -> bool {
        matches!(action, TasksAction::LoadTasks { .. })
    }

    fn initial_state() -> TasksViewState {
        TasksViewState::idle()
    }

    fn reduce(state: TasksViewState, result: TasksResult) -> TasksViewState {
        state.reduce(result)
    }
}
