//! Task editor screen, used both to create and to update tasks.

mod processor;
mod state;

pub use processor::AddEditTaskActionProcessor;
pub use state::AddEditTaskViewState;

use crate::mvi::{Outcome, ScreenContract};
use crate::task::domain::{Task, TaskId};

/// Events entering the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEditTaskIntent {
    /// The editor was opened, for an existing task or for a new one.
    Initial(Option<TaskId>),
    /// The user submitted the form.
    SaveTask {
        /// Task being edited, or `None` when creating.
        task_id: Option<TaskId>,
        /// Entered title.
        title: String,
        /// Entered description.
        description: String,
    },
}

/// Commands executed by [`AddEditTaskActionProcessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEditTaskAction {
    /// Load an existing task into the form.
    PopulateTask(TaskId),
    /// Create a new task.
    CreateTask {
        /// Entered title.
        title: String,
        /// Entered description.
        description: String,
    },
    /// Replace an existing task's text.
    UpdateTask {
        /// Task being edited.
        task_id: TaskId,
        /// Entered title.
        title: String,
        /// Entered description.
        description: String,
    },
}

/// Outcomes folded into [`AddEditTaskViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEditTaskResult {
    /// Progress of loading the task into the form.
    Populate(Outcome<Task>),
    /// Progress of persisting the form.
    Save(Outcome<()>),
    /// The form was submitted with neither title nor description.
    Empty,
}

/// Contract of the editor screen.
#[derive(Debug)]
pub struct AddEditTaskScreen;

impl ScreenContract for AddEditTaskScreen {
    type Intent = AddEditTaskIntent;
    type Action = AddEditTaskAction;
    type Result = AddEditTaskResult;
    type State = AddEditTaskViewState;

    fn is_initial_intent(intent: &AddEditTaskIntent) -> bool {
        matches!(intent, AddEditTaskIntent::Initial(_))
    }

    fn action_from_intent(intent: AddEditTaskIntent) -> Option<AddEditTaskAction> {
        match intent {
            AddEditTaskIntent::Initial(task_id) => task_id.map(AddEditTaskAction::PopulateTask),
            AddEditTaskIntent::SaveTask {
                task_id: None,
                title,
                description,
            } => Some(AddEditTaskAction::CreateTask { title, description }),
            AddEditTaskIntent::SaveTask {
                task_id: Some(task_id),
                title,
                description,
            } => Some(AddEditTaskAction::UpdateTask {
                task_id,
                title,
                description,
            }),
        }
    }

    fn is_load_action(action: &AddEditTaskAction) -> bool {
        matches!(action, AddEditTaskAction::PopulateTask(_))
    }

    fn initial_state() -> AddEditTaskViewState {
        AddEditTaskViewState::idle()
    }

    fn reduce(state: AddEditTaskViewState, result: AddEditTaskResult) -> AddEditTaskViewState {
        state.reduce(result)
    }
}
