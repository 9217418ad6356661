//! Single task detail screen.

mod processor;
mod state;

pub use processor::TaskDetailActionProcessor;
pub use state::{TaskDetailNotification, TaskDetailViewState};

use crate::mvi::{Outcome, ScreenContract};
use crate::task::domain::{Task, TaskId};

/// Events entering the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailIntent {
    /// The screen was opened for a task.
    Initial(TaskId),
    /// The user deleted the task.
    DeleteTask(TaskId),
    /// The user marked the task as active.
    ActivateTask(TaskId),
    /// The user marked the task as completed.
    CompleteTask(TaskId),
}

/// Commands executed by [`TaskDetailActionProcessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailAction {
    /// Fetch the task.
    PopulateTask(TaskId),
    /// Delete the task.
    DeleteTask(TaskId),
    /// Activate the task and fetch it again.
    ActivateTask(TaskId),
    /// Complete the task and fetch it again.
    CompleteTask(TaskId),
}

/// Outcomes folded into [`TaskDetailViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailResult {
    /// Progress of fetching the task.
    Populate(Outcome<Task>),
    /// Progress of activating the task; success carries the fresh task.
    Activate(Outcome<Task>),
    /// Progress of completing the task; success carries the fresh task.
    Complete(Outcome<Task>),
    /// Progress of deleting the task.
    Delete(Outcome<()>),
    /// A transient notification should be hidden.
    HideNotification(TaskDetailNotification),
}

/// Contract of the detail screen.
#[derive(Debug)]
pub struct TaskDetailScreen;

impl ScreenContract for TaskDetailScreen {
    type Intent = TaskDetailIntent;
    type Action = TaskDetailAction;
    type Result = TaskDetailResult;
    type State = TaskDetailViewState;

    fn is_initial_intent(intent: &TaskDetailIntent) -> bool {
        matches!(intent, TaskDetailIntent::Initial(_))
    }

    fn action_from_intent(intent: TaskDetailIntent) -> Option<TaskDetailAction> {
        let action = match intent {
            TaskDetailIntent::Initial(id) => TaskDetailAction::PopulateTask(id),
            TaskDetailIntent::DeleteTask(id) => TaskDetailAction::DeleteTask(id),
            TaskDetailIntent::ActivateTask(id) => TaskDetailAction::ActivateTask(id),
            TaskDetailIntent::CompleteTask(id) => TaskDetailAction::CompleteTask(id),
        };
        Some(action)
    }

    fn is_load_action(action: &TaskDetailAction) -> bool {
        matches!(action, TaskDetailAction::PopulateTask(_))
    }

    fn initial_state() -> TaskDetailViewState {
        TaskDetailViewState::idle()
    }

    fn reduce(state: TaskDetailViewState, result: TaskDetailResult) -> TaskDetailViewState {
        state.reduce(result)
    }
}
