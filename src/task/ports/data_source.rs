//! Data source port shared by the remote and local task collaborators.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task data source operations.
pub type TaskDataSourceResult<T> = Result<T, TaskDataSourceError>;

/// Task storage contract.
///
/// The store treats remote and local implementations identically and makes
/// no assumption about their storage format.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskDataSource: Send + Sync {
    /// Returns every stored task, in insertion order.
    async fn get_tasks(&self) -> TaskDataSourceResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_task(&self, id: &TaskId) -> TaskDataSourceResult<Option<Task>>;

    /// Inserts or replaces a task.
    async fn save_task(&self, task: &Task) -> TaskDataSourceResult<()>;

    /// Stores the completed variant of `task`.
    async fn complete_task(&self, task: &Task) -> TaskDataSourceResult<()>;

    /// Marks the stored task with the given identifier as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDataSourceError::NotFound`] when no such task is stored.
    async fn complete_task_by_id(&self, id: &TaskId) -> TaskDataSourceResult<()>;

    /// Stores the active variant of `task`.
    async fn activate_task(&self, task: &Task) -> TaskDataSourceResult<()>;

    /// Marks the stored task with the given identifier as active.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDataSourceError::NotFound`] when no such task is stored.
    async fn activate_task_by_id(&self, id: &TaskId) -> TaskDataSourceResult<()>;

    /// Removes every completed task.
    async fn clear_completed_tasks(&self) -> TaskDataSourceResult<()>;

    /// Removes a task. Removing an unknown task is not an error.
    async fn delete_task(&self, id: &TaskId) -> TaskDataSourceResult<()>;

    /// Removes every task.
    async fn delete_all_tasks(&self) -> TaskDataSourceResult<()>;
}

/// Errors returned by task data source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskDataSourceError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The source cannot be reached (network down, service disabled).
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskDataSourceError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
