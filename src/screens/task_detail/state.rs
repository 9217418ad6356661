//! View state of the detail screen.

use super::TaskDetailResult;
use crate::mvi::{Outcome, ViewError};
use crate::task::domain::Task;

/// Transient confirmation shown on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDetailNotification {
    /// The task was marked completed.
    TaskComplete,
    /// The task was marked active.
    TaskActivated,
    /// The task was deleted.
    TaskDeleted,
}

/// Immutable snapshot rendered by the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetailViewState {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Whether the task is still to be done.
    pub active: bool,
    /// The task is being fetched.
    pub loading: bool,
    /// An activate, complete or delete operation is running.
    pub updating: bool,
    /// Last failure, if any.
    pub error: Option<ViewError>,
    /// Confirmation currently shown.
    pub ui_notification: Option<TaskDetailNotification>,
}

impl TaskDetailViewState {
    /// State shown before the task has been fetched.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            active: false,
            loading: false,
            updating: false,
            error: None,
            ui_notification: None,
        }
    }

    /// Folds one result into the state.
    #[must_use]
    pub fn reduce(self, result: TaskDetailResult) -> Self {
        match result {
            TaskDetailResult::Populate(outcome) => self.reduce_populate(outcome),
            TaskDetailResult::Activate(outcome) => {
                self.reduce_toggle(outcome, TaskDetailNotification::TaskActivated)
            }
            TaskDetailResult::Complete(outcome) => {
                self.reduce_toggle(outcome, TaskDetailNotification::TaskComplete)
            }
            TaskDetailResult::Delete(outcome) => self.reduce_delete(outcome),
            TaskDetailResult::HideNotification(notification) => {
                if self.ui_notification == Some(notification) {
                    Self {
                        ui_notification: None,
                        ..self
                    }
                } else {
                    self
                }
            }
        }
    }

    fn reduce_populate(self, outcome: Outcome<Task>) -> Self {
        match outcome {
            Outcome::InFlight => Self {
                loading: true,
                ..self
            },
            Outcome::Success(task) => Self {
                loading: false,
                active: task.is_active(),
                title: task.title().to_owned(),
                description: task.description().to_owned(),
                error: None,
                ..self
            },
            Outcome::Failure(error) => Self {
                loading: false,
                error: Some(error),
                ..self
            },
        }
    }

    fn reduce_toggle(self, outcome: Outcome<Task>, notification: TaskDetailNotification) -> Self {
        match outcome {
            Outcome::InFlight => Self {
                updating: true,
                ..self
            },
            Outcome::Success(task) => Self {
                updating: false,
                active: task.is_active(),
                title: task.title().to_owned(),
                description: task.description().to_owned(),
                ui_notification: Some(notification),
                ..self
            },
            Outcome::Failure(error) => Self {
                updating: false,
                error: Some(error),
                ..self
            },
        }
    }

    fn reduce_delete(self, outcome: Outcome<()>) -> Self {
        match outcome {
            Outcome::InFlight => Self {
                updating: true,
                ..self
            },
            Outcome::Success(()) => Self {
                updating: false,
                ui_notification: Some(TaskDetailNotification::TaskDeleted),
                ..self
            },
            Outcome::Failure(error) => Self {
                updating: false,
                error: Some(error),
                ..self
            },
        }
    }
}

impl Default for TaskDetailViewState {
    fn default() -> Self {
        Self::idle()
    }
}
