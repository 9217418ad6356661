//! View state of the editor screen.

use super::AddEditTaskResult;
use crate::mvi::{Outcome, ViewError};
use crate::task::domain::Task;

/// Immutable snapshot rendered by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEditTaskViewState {
    /// Title shown in the form.
    pub title: String,
    /// Description shown in the form.
    pub description: String,
    /// The task being edited is being fetched.
    pub is_loading: bool,
    /// The last submission was rejected for having no content.
    pub is_empty: bool,
    /// A save is running.
    pub is_saving: bool,
    /// The task has been persisted.
    pub is_saved: bool,
    /// Last failure, if any.
    pub error: Option<ViewError>,
}

impl AddEditTaskViewState {
    /// State of a blank form.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            is_loading: false,
            is_empty: false,
            is_saving: false,
            is_saved: false,
            error: None,
        }
    }

    /// Folds one result into the state.
    #[must_use]
    pub fn reduce(self, result: AddEditTaskResult) -> Self {
        match result {
            AddEditTaskResult::Populate(outcome) => self.reduce_populate(outcome),
            AddEditTaskResult::Save(outcome) => self.reduce_save(outcome),
            AddEditTaskResult::Empty => Self {
                is_saving: false,
                is_empty: true,
                ..self
            },
        }
    }

    fn reduce_populate(self, outcome: Outcome<Task>) -> Self {
        match outcome {
            Outcome::InFlight => Self {
                is_loading: true,
                ..self
            },
            // Completed tasks are not editable; their text is not loaded.
            Outcome::Success(task) if task.is_completed() => Self {
                is_loading: false,
                ..self
            },
            Outcome::Success(task) => Self {
                is_loading: false,
                title: task.title().to_owned(),
                description: task.description().to_owned(),
                error: None,
                ..self
            },
            Outcome::Failure(error) => Self {
                is_loading: false,
                error: Some(error),
                ..self
            },
        }
    }

    fn reduce_save(self, outcome: Outcome<()>) -> Self {
        match outcome {
            Outcome::InFlight => Self {
                is_saving: true,
                ..self
            },
            Outcome::Success(()) => Self {
                is_saving: false,
                is_empty: false,
                is_saved: true,
                ..self
            },
            Outcome::Failure(error) => Self {
                is_saving: false,
                error: Some(error),
                ..self
            },
        }
    }
}

impl Default for AddEditTaskViewState {
    fn default() -> Self {
        Self::idle()
    }
}
