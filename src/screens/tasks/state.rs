//! View state of the task list screen.

use super::{LoadedTasks, TasksResult};
use crate::mvi::{Outcome, ViewError};
use crate::task::domain::{Task, TasksFilterType};

/// Transient confirmation shown after a bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TasksNotification {
    /// A task was marked completed.
    TaskComplete,
    /// A task was marked active.
    TaskActivated,
    /// Completed tasks were removed.
    CompletedTasksCleared,
}

/// Immutable snapshot rendered by the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksViewState {
    /// A list load is running.
    pub is_loading: bool,
    /// An activate, complete or clear operation is running.
    pub is_updating: bool,
    /// Filter applied to [`Self::tasks`].
    pub filter: TasksFilterType,
    /// Tasks matching [`Self::filter`], in store order.
    pub tasks: Vec<Task>,
    /// Last failure, if any.
    pub error: Option<ViewError>,
    /// Confirmation currently shown.
    pub ui_notification: Option<TasksNotification>,
}

impl TasksViewState {
    /// State shown before anything has been loaded.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            is_loading: false,
            is_updating: false,
            filter: TasksFilterType::All,
            tasks: Vec::new(),
            error: None,
            ui_notification: None,
        }
    }

    /// Folds one result into the state.
    #[must_use]
    pub fn reduce(self, result: TasksResult) -> Self {
        match result {
            TasksResult::Load(outcome) => self.reduce_load(outcome),
            TasksResult::Activate(outcome) => {
                self.reduce_update(outcome, TasksNotification::TaskActivated)
            }
            TasksResult::Complete(outcome) => {
                self.reduce_update(outcome, TasksNotification::TaskComplete)
            }
            TasksResult::ClearCompleted(outcome) => {
                self.reduce_update(outcome, TasksNotification::CompletedTasksCleared)
            }
            TasksResult::HideNotification(notification) => self.hide(notification),
        }
    }

    fn reduce_load(self, outcome: Outcome<LoadedTasks>) -> Self {
        match outcome {
            Outcome::InFlight => Self {
                is_loading: true,
                ..self
            },
            Outcome::Success(loaded) => {
                let filter = loaded.filter.unwrap_or(self.filter);
                Self {
                    is_loading: false,
                    tasks: filter.apply(&loaded.tasks),
                    filter,
                    error: None,
                    ..self
                }
            }
            Outcome::Failure(error) => Self {
                is_loading: false,
                error: Some(error),
                ..self
            },
        }
    }

    fn reduce_update(self, outcome: Outcome<Vec<Task>>, notification: TasksNotification) -> Self {
        match outcome {
            Outcome::InFlight => Self {
                is_updating: true,
                ..self
            },
            Outcome::Success(tasks) => Self {
                is_updating: false,
                tasks: self.filter.apply(&tasks),
                ui_notification: Some(notification),
                ..self
            },
            Outcome::Failure(error) => Self {
                is_updating: false,
                error: Some(error),
                ..self
            },
        }
    }

    fn hide(self, notification: TasksNotification) -> Self {
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

impl Default for TasksViewState {
    fn default() -> Self {
        Self::idle()
    }
}
