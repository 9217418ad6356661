//! Executes editor actions against the task store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{AddEditTaskAction, AddEditTaskResult, AddEditTaskScreen};
use crate::mvi::{ActionProcessor, Outcome, ResultSink};
use crate::task::{
    domain::Task,
    ports::TaskDataSource,
    services::TaskStore,
};

/// Action processor of the editor screen.
pub struct AddEditTaskActionProcessor<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    store: Arc<TaskStore<R, L>>,
}

impl<R, L> AddEditTaskActionProcessor<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    /// Creates a processor backed by `store`.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<R, L>>) -> Self {
        Self { store }
    }

    /// Persists `task` unless it has no content.
    async fn save(&self, task: Task, results: &ResultSink<AddEditTaskResult>) {
        results.emit(AddEditTaskResult::Save(Outcome::InFlight));
        if task.is_empty() {
            debug!(task_id = %task.id(), "rejecting task without content");
            results.emit(AddEditTaskResult::Empty);
            return;
        }
        let saved = self.store.save_task(task).await;
        results.emit(AddEditTaskResult::Save(Outcome::settle(saved)));
    }
}

#[async_trait]
impl<R, L> ActionProcessor<AddEditTaskScreen> for AddEditTaskActionProcessor<R, L>
where
    R: TaskDataSource + 'static,
    L: TaskDataSource + 'static,
{
    #[instrument(level = "debug", skip(self, results))]
    async fn process(&self, action: AddEditTaskAction, results: ResultSink<AddEditTaskResult>) {
        match action {
            AddEditTaskAction::PopulateTask(id) => {
                results.emit(AddEditTaskResult::Populate(Outcome::InFlight));
                let fetched = self.store.get_task(&id).await;
                results.emit(AddEditTaskResult::Populate(Outcome::settle(fetched)));
            }
            AddEditTaskAction::CreateTask { title, description } => {
                self.save(Task::new(title, description), &results).await;
            }
            AddEditTaskAction::UpdateTask {
                task_id,
                title,
                description,
            } => {
                self.save(Task::with_id(task_id, title, description), &results)
                    .await;
            }
        }
    }
}
