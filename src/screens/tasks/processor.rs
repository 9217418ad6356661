//! Executes task list actions against the task store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use super::{LoadedTasks, TasksAction, TasksNotification, TasksResult, TasksScreen};
use crate::mvi::{ActionProcessor, Outcome, ResultSink};
use crate::task::{
    domain::Task,
    ports::TaskDataSource,
    services::{TaskStore, TaskStoreResult},
};

/// Action processor of the task list screen.
pub struct TasksActionProcessor<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    store: Arc<TaskStore<R, L>>,
    notification_delay: Duration,
}

impl<R, L> TasksActionProcessor<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    /// Creates a processor that hides confirmations after
    /// `notification_delay`.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<R, L>>, notification_delay: Duration) -> Self {
        Self {
            store,
            notification_delay,
        }
    }

    async fn activate(&self, task: &Task) -> TaskStoreResult<Vec<Task>> {
        self.store.activate_task(task).await?;
        self.store.get_tasks(false).await
    }

    async fn complete(&self, task: &Task) -> TaskStoreResult<Vec<Task>> {
        self.store.complete_task(task).await?;
        self.store.get_tasks(false).await
    }

    async fn clear_completed(&self) -> TaskStoreResult<Vec<Task>> {
        self.store.clear_completed_tasks().await?;
        self.store.get_tasks(false).await
    }

    /// Emits the terminal result of an update and, on success, schedules
    /// hiding its confirmation.
    async fn settle_update(
        &self,
        results: &ResultSink<TasksResult>,
        outcome: TaskStoreResult<Vec<Task>>,
        wrap: fn(Outcome<Vec<Task>>) -> TasksResult,
        notification: TasksNotification,
    ) {
        let settled = Outcome::settle(outcome);
        let succeeded = matches!(settled, Outcome::Success(_));
        results.emit(wrap(settled));
        if succeeded {
            results
                .emit_after(
                    self.notification_delay,
                    TasksResult::HideNotification(notification),
                )
                .await;
        }
    }
}

#[async_trait]
impl<R, L> ActionProcessor<TasksScreen> for TasksActionProcessor<R, L>
where
    R: TaskDataSource + 'static,
    L: TaskDataSource + 'static,
{
    #[instrument(level = "debug", skip(self, results))]
    async fn process(&self, action: TasksAction, results: ResultSink<TasksResult>) {
        match action {
            TasksAction::LoadTasks {
                force_update,
                filter,
            } => {
                results.emit(TasksResult::Load(Outcome::InFlight));
                let loaded = self
                    .store
                    .get_tasks(force_update)
                    .await
                    .map(|tasks| LoadedTasks { tasks, filter });
                results.emit(TasksResult::Load(Outcome::settle(loaded)));
            }
            TasksAction::ActivateTask(task) => {
                results.emit(TasksResult::Activate(Outcome::InFlight));
                let outcome = self.activate(&task).await;
                self.settle_update(
                    &results,
                    outcome,
                    TasksResult::Activate,
                    TasksNotification::TaskActivated,
                )
                .await;
            }
            TasksAction::CompleteTask(task) => {
                results.emit(TasksResult::Complete(Outcome::InFlight));
                let outcome = self.complete(&task).await;
                self.settle_update(
                    &results,
                    outcome,
                    TasksResult::Complete,
                    TasksNotification::TaskComplete,
                )
                .await;
            }
            TasksAction::ClearCompletedTasks => {
                results.emit(TasksResult::ClearCompleted(Outcome::InFlight));
                let outcome = self.clear_completed().await;
                self.settle_update(
                    &results,
                    outcome,
                    TasksResult::ClearCompleted,
                    TasksNotification::CompletedTasksCleared,
                )
                .await;
            }
        }
    }
}
