//! Task entity.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// One to-do item.
///
/// Tasks are values: two tasks are equal when every field is equal, and an
/// "update" produces a new task carrying the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    #[serde(default)]
    completed: bool,
}

impl Task {
    /// Creates a new active task with a freshly generated identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(TaskId::new(), title, description)
    }

    /// Creates an active task with a caller-supplied identifier.
    #[must_use]
    pub fn with_id(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Returns a copy of this task with the completion flag set.
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            completed: true,
            ..self.clone()
        }
    }

    /// Returns a copy of this task with the completion flag cleared.
    #[must_use]
    pub fn activated(&self) -> Self {
        Self {
            completed: false,
            ..self.clone()
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.completed
    }

    /// Returns whether both title and description are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Returns the text shown for the task in a list: the title, or the
    /// description when the title is empty.
    #[must_use]
    pub fn title_for_list(&self) -> &str {
        if self.title.is_empty() {
            &self.description
        } else {
            &self.title
        }
    }
}
