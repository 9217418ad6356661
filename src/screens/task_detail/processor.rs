//! Executes detail screen actions against the task store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use super::{TaskDetailAction, TaskDetailNotification, TaskDetailResult, TaskDetailScreen};
use crate::mvi::{ActionProcessor, Outcome, ResultSink};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskDataSource,
    services::{TaskStore, TaskStoreResult},
};

/// Action processor of the detail screen.
pub struct TaskDetailActionProcessor<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    store: Arc<TaskStore<R, L>>,
    notification_delay: Duration,
}

impl<R, L> TaskDetailActionProcessor<R, L>
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

    async fn activate(&self, id: &TaskId) -> TaskStoreResult<Task> {
        self.store.activate_task_by_id(id).await?;
        self.store.get_task(id).await
    }

    async fn complete(&self, id: &TaskId) -> TaskStoreResult<Task> {
        self.store.complete_task_by_id(id).await?;
        self.store.get_task(id).await
    }

    async fn settle_toggle(
        &self,
        results: &ResultSink<TaskDetailResult>,
        outcome: TaskStoreResult<Task>,
        wrap: fn(Outcome<Task>) -> TaskDetailResult,
        notification: TaskDetailNotification,
    ) {
        let settled = Outcome::settle(outcome);
        let succeeded = matches!(settled, Outcome::Success(_));
        results.emit(wrap(settled));
        if succeeded {
            results
                .emit_after(
                    self.notification_delay,
                    TaskDetailResult::HideNotification(notification),
                )
                .await;
        }
    }
}

#[async_trait]
impl<R, L> ActionProcessor<TaskDetailScreen> for TaskDetailActionProcessor<R, L>
where
    R: TaskDataSource + 'static,
    L: TaskDataSource + 'static,
{
    #[instrument(level = "debug", skip(self, results))]
    async fn process(&self, action: TaskDetailAction, results: ResultSink<TaskDetailResult>) {
        match action {
            TaskDetailAction::PopulateTask(id) => {
                results.emit(TaskDetailResult::Populate(Outcome::InFlight));
                let fetched = self.store.get_task(&id).await;
                results.emit(TaskDetailResult::Populate(Outcome::settle(fetched)));
            }
            TaskDetailAction::DeleteTask(id) => {
                results.emit(TaskDetailResult::Delete(Outcome::InFlight));
                let deleted = self.store.delete_task(&id).await;
                results.emit(TaskDetailResult::Delete(Outcome::settle(deleted)));
            }
            TaskDetailAction::ActivateTask(id) => {
                results.emit(TaskDetailResult::Activate(Outcome::InFlight));
                let outcome = self.activate(&id).await;
                self.settle_toggle(
                    &results,
                    outcome,
                    TaskDetailResult::Activate,
                    TaskDetailNotification::TaskActivated,
                )
                .await;
            }
            TaskDetailAction::CompleteTask(id) => {
                results.emit(TaskDetailResult::Complete(Outcome::InFlight));
                let outcome = self.complete(&id).await;
                self.settle_toggle(
                    &results,
                    outcome,
                    TaskDetailResult::Complete,
                    TaskDetailNotification::TaskComplete,
                )
                .await;
            }
        }
    }
}
