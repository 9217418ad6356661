//! Shared world state for task store BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use todo_mvi::task::{
    adapters::memory::InMemoryTaskDataSource,
    domain::Task,
    services::{TaskStore, TaskStoreResult},
};

/// Store type used by the BDD world.
pub type TestStore = TaskStore<InMemoryTaskDataSource, InMemoryTaskDataSource>;

/// Scenario world for task store behaviour tests.
pub struct TaskStoreWorld {
    pub remote: InMemoryTaskDataSource,
    pub local: InMemoryTaskDataSource,
    pub store: TestStore,
    pub last_saved: Option<Task>,
    pub last_list: Option<TaskStoreResult<Vec<Task>>>,
    pub last_lookup: Option<TaskStoreResult<Task>>,
}

impl TaskStoreWorld {
    /// Creates a world over empty data sources.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(InMemoryTaskDataSource::new(), InMemoryTaskDataSource::new())
    }

    /// Creates a world over the given data sources.
    #[must_use]
    pub fn with_sources(remote: InMemoryTaskDataSource, local: InMemoryTaskDataSource) -> Self {
        let store = TaskStore::new(Arc::new(remote.clone()), Arc::new(local.clone()));
        Self {
            remote,
            local,
            store,
            last_saved: None,
            last_list: None,
            last_lookup: None,
        }
    }

    /// Returns the tasks from the last successful list request.
    pub fn listed(&self) -> eyre::Result<&[Task]> {
        match self.last_list.as_ref() {
            Some(Ok(tasks)) => Ok(tasks.as_slice()),
            Some(Err(err)) => Err(eyre::eyre!("task list request failed: {err}")),
            None => Err(eyre::eyre!("task list was never requested")),
        }
    }
}

impl Default for TaskStoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStoreWorld {
    TaskStoreWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
