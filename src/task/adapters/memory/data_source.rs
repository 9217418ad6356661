//! In-memory data source used as the fake remote service and in tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskDataSource, TaskDataSourceError, TaskDataSourceResult},
};

/// Thread-safe in-memory task data source.
///
/// Tasks keep their insertion order. Reads can be delayed to simulate a
/// remote service, and the source can be switched offline to exercise
/// failure paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskDataSource {
    state: Arc<RwLock<InMemoryTaskState>>,
    latency: Duration,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    offline: bool,
}

impl InMemoryTaskState {
    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn upsert(&mut self, task: Task) {
        match self.position(task.id()) {
            Some(index) => {
                if let Some(slot) = self.tasks.get_mut(index) {
                    *slot = task;
                }
            }
            None => self.tasks.push(task),
        }
    }

    fn update_by_id(
        &mut self,
        id: &TaskId,
        update: impl FnOnce(&Task) -> Task,
    ) -> TaskDataSourceResult<()> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskDataSourceError::NotFound(id.clone()))?;
        *slot = update(slot);
        Ok(())
    }
}

impl InMemoryTaskDataSource {
    /// Creates an empty in-memory data source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a data source pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let source = Self::new();
        if let Ok(mut state) = source.state.write() {
            for task in tasks {
                state.upsert(task);
            }
        }
        source
    }

    /// Creates the sample remote service holding two tasks.
    #[must_use]
    pub fn seeded_remote(latency: Duration) -> Self {
        Self::with_tasks([
            Task::new(
                "Build tower in Pisa",
                "Ground looks good, no foundation work required.",
            ),
            Task::new(
                "Finish bridge in Tacoma",
                "Found awesome girders at half the cost!",
            ),
        ])
        .with_latency(latency)
    }

    /// Delays every read by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Switches the source offline (every call fails) or back online.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the state lock is poisoned.
    pub fn set_offline(&self, offline: bool) -> TaskDataSourceResult<()> {
        self.write()?.offline = offline;
        Ok(())
    }

    fn read(&self) -> TaskDataSourceResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        let state = self.state.read().map_err(|err| {
            TaskDataSourceError::storage(std::io::Error::other(err.to_string()))
        })?;
        if state.offline {
            return Err(TaskDataSourceError::Unavailable(
                "in-memory source is offline".to_owned(),
            ));
        }
        Ok(state)
    }

    fn write(&self) -> TaskDataSourceResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskDataSourceError::storage(std::io::Error::other(err.to_string())))
    }

    fn write_online(&self) -> TaskDataSourceResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        let state = self.write()?;
        if state.offline {
            return Err(TaskDataSourceError::Unavailable(
                "in-memory source is offline".to_owned(),
            ));
        }
        Ok(state)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl TaskDataSource for InMemoryTaskDataSource {
    async fn get_tasks(&self) -> TaskDataSourceResult<Vec<Task>> {
        self.simulate_latency().await;
        Ok(self.read()?.tasks.clone())
    }

    async fn get_task(&self, id: &TaskId) -> TaskDataSourceResult<Option<Task>> {
        self.simulate_latency().await;
        let state = self.read()?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn save_task(&self, task: &Task) -> TaskDataSourceResult<()> {
        self.write_online()?.upsert(task.clone());
        Ok(())
    }

    async fn complete_task(&self, task: &Task) -> TaskDataSourceResult<()> {
        self.write_online()?.upsert(task.completed());
        Ok(())
    }

    async fn complete_task_by_id(&self, id: &TaskId) -> TaskDataSourceResult<()> {
        self.write_online()?.update_by_id(id, Task::completed)
    }

    async fn activate_task(&self, task: &Task) -> TaskDataSourceResult<()> {
        self.write_online()?.upsert(task.activated());
        Ok(())
    }

    async fn activate_task_by_id(&self, id: &TaskId) -> TaskDataSourceResult<()> {
        self.write_online()?.update_by_id(id, Task::activated)
    }

    async fn clear_completed_tasks(&self) -> TaskDataSourceResult<()> {
        self.write_online()?.tasks.retain(Task::is_active);
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> TaskDataSourceResult<()> {
        self.write_online()?.tasks.retain(|task| task.id() != id);
        Ok(())
    }

    async fn delete_all_tasks(&self) -> TaskDataSourceResult<()> {
        self.write_online()?.tasks.clear();
        Ok(())
    }
}
