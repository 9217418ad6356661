//! Task store: one read/write facade over a remote and a local data source.
//!
//! Reads are answered from the in-memory cache when it is clean and holds
//! tasks (or has been loaded from a source), otherwise from the local source,
//! falling back to the remote one. Writes go to both sources and are mirrored
//! in the cache. The cache lock is held for the whole of every operation, so
//! concurrent callers are serialized.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::cache::TaskCache;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskDataSource, TaskDataSourceError, TaskDataSourceResult},
};

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// What a failed read was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    /// A single task.
    Task(TaskId),
    /// The task list.
    TaskList,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task {id}"),
            Self::TaskList => f.write_str("task list"),
        }
    }
}

/// Which of the two data sources produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTier {
    /// The remote service.
    Remote,
    /// The local persistent store.
    Local,
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Errors surfaced by the task store.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Neither data source holds the requested data.
    #[error("{0} not found in any data source")]
    NotFound(Missing),

    /// An underlying data source failed; the error is passed through as is.
    #[error("{tier} data source failed: {source}")]
    Source {
        /// Source that failed.
        tier: SourceTier,
        /// Error reported by the source.
        source: TaskDataSourceError,
    },
}

impl TaskStoreError {
    /// Returns whether the error reports missing data.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    fn remote(source: TaskDataSourceError) -> Self {
        Self::Source {
            tier: SourceTier::Remote,
            source,
        }
    }

    fn local(source: TaskDataSourceError) -> Self {
        Self::Source {
            tier: SourceTier::Local,
            source,
        }
    }
}

/// Repository facade over a remote and a local task data source.
///
/// Construct one instance in the composition root and share it behind an
/// [`Arc`] with every screen.
pub struct TaskStore<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    remote: Arc<R>,
    local: Arc<L>,
    cache: Mutex<TaskCache>,
}

impl<R, L> TaskStore<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    /// Creates a store with an empty, unprimed cache.
    #[must_use]
    pub fn new(remote: Arc<R>, local: Arc<L>) -> Self {
        Self {
            remote,
            local,
            cache: Mutex::new(TaskCache::default()),
        }
    }

    /// Returns every task.
    ///
    /// A clean cache that holds tasks, or has been loaded from a source,
    /// answers directly unless `force_update` is set.
    /// Forcing marks the cache dirty, which sends the read straight to the
    /// remote source; otherwise the local source is tried first and the
    /// remote one only when the local list is empty or unreadable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when neither source holds any
    /// task on a non-forced read, or [`TaskStoreError::Source`] when the
    /// remote source fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_tasks(&self, force_update: bool) -> TaskStoreResult<Vec<Task>> {
        let mut cache = self.cache.lock().await;
        if force_update {
            cache.mark_dirty();
        }
        if cache.is_fresh() {
            debug!("serving task list from cache");
            return Ok(cache.tasks());
        }

        let refreshing = cache.is_dirty();
        if !refreshing {
            match self.local.get_tasks().await {
                Ok(tasks) if !tasks.is_empty() => {
                    cache.merge_loaded(&tasks);
                    return Ok(cache.tasks());
                }
                Ok(_) => debug!("local task list empty, querying remote"),
                Err(err) => warn!(error = %err, "local task list unreadable, querying remote"),
            }
        }

        let tasks = self
            .remote
            .get_tasks()
            .await
            .map_err(TaskStoreError::remote)?;
        if tasks.is_empty() && !refreshing {
            return Err(TaskStoreError::NotFound(Missing::TaskList));
        }
        for task in &tasks {
            if let Err(err) = self.local.save_task(task).await {
                warn!(task_id = %task.id(), error = %err, "failed to persist remote task locally");
            }
        }
        cache.merge_refreshed(&tasks);
        Ok(tasks)
    }

    /// Returns one task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task is in neither
    /// source, or [`TaskStoreError::Source`] when the remote source fails.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_task(&self, id: &TaskId) -> TaskStoreResult<Task> {
        let mut cache = self.cache.lock().await;
        if let Some(task) = cache.get(id) {
            debug!("serving task from cache");
            return Ok(task.clone());
        }

        match self.local.get_task(id).await {
            Ok(Some(task)) => {
                cache.upsert(task.clone());
                return Ok(task);
            }
            Ok(None) => debug!("task not stored locally, querying remote"),
            Err(err) => warn!(error = %err, "local task unreadable, querying remote"),
        }

        let task = self
            .remote
            .get_task(id)
            .await
            .map_err(TaskStoreError::remote)?
            .ok_or_else(|| TaskStoreError::NotFound(Missing::Task(id.clone())))?;
        if let Err(err) = self.local.save_task(&task).await {
            warn!(error = %err, "failed to persist remote task locally");
        }
        cache.upsert(task.clone());
        Ok(task)
    }

    /// Saves a task to both sources and the cache.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    /// The cache is updated regardless.
    pub async fn save_task(&self, task: Task) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        let remote = self.remote.save_task(&task).await;
        let local = self.local.save_task(&task).await;
        cache.upsert(task);
        settle("save_task", remote, local)
    }

    /// Marks a task as completed in both sources and the cache.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    pub async fn complete_task(&self, task: &Task) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        self.write_completed(&mut cache, task).await
    }

    /// Marks the cached task with the given identifier as completed.
    ///
    /// An identifier missing from the cache is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    pub async fn complete_task_by_id(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        let Some(task) = cache.get(id).cloned() else {
            debug!(task_id = %id, "complete ignored, task not cached");
            return Ok(());
        };
        self.write_completed(&mut cache, &task).await
    }

    /// Marks a task as active in both sources and the cache.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    pub async fn activate_task(&self, task: &Task) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        self.write_activated(&mut cache, task).await
    }

    /// Marks the cached task with the given identifier as active.
    ///
    /// An identifier missing from the cache is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    pub async fn activate_task_by_id(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        let Some(task) = cache.get(id).cloned() else {
            debug!(task_id = %id, "activate ignored, task not cached");
            return Ok(());
        };
        self.write_activated(&mut cache, &task).await
    }

    /// Removes every completed task.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    pub async fn clear_completed_tasks(&self) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        let remote = self.remote.clear_completed_tasks().await;
        let local = self.local.clear_completed_tasks().await;
        cache.retain(Task::is_active);
        settle("clear_completed_tasks", remote, local)
    }

    /// Removes every task.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    pub async fn delete_all_tasks(&self) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        let remote = self.remote.delete_all_tasks().await;
        let local = self.local.delete_all_tasks().await;
        cache.clear();
        settle("delete_all_tasks", remote, local)
    }

    /// Removes one task.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskStoreError::Source`] reported by the sources.
    pub async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut cache = self.cache.lock().await;
        let remote = self.remote.delete_task(id).await;
        let local = self.local.delete_task(id).await;
        cache.remove(id);
        settle("delete_task", remote, local)
    }

    /// Marks the cache dirty so the next list read goes to the remote
    /// source. Performs no I/O.
    pub async fn refresh_tasks(&self) {
        self.cache.lock().await.mark_dirty();
    }

    /// Returns a snapshot of the cached tasks in insertion order.
    pub async fn cached_tasks(&self) -> Vec<Task> {
        self.cache.lock().await.tasks()
    }

    /// Returns whether the cache is marked dirty.
    pub async fn is_dirty(&self) -> bool {
        self.cache.lock().await.is_dirty()
    }

    async fn write_completed(&self, cache: &mut TaskCache, task: &Task) -> TaskStoreResult<()> {
        let remote = self.remote.complete_task(task).await;
        let local = self.local.complete_task(task).await;
        cache.upsert(task.completed());
        settle("complete_task", remote, local)
    }

    async fn write_activated(&self, cache: &mut TaskCache, task: &Task) -> TaskStoreResult<()> {
        let remote = self.remote.activate_task(task).await;
        let local = self.local.activate_task(task).await;
        cache.upsert(task.activated());
        settle("activate_task", remote, local)
    }
}

/// Folds the outcome of a dual write: both failures are logged, the remote
/// one is reported first.
fn settle(
    operation: &'static str,
    remote: TaskDataSourceResult<()>,
    local: TaskDataSourceResult<()>,
) -> TaskStoreResult<()> {
    if let Err(err) = &remote {
        warn!(operation, tier = %SourceTier::Remote, error = %err, "data source write failed");
    }
    if let Err(err) = &local {
        warn!(operation, tier = %SourceTier::Local, error = %err, "data source write failed");
    }
    remote.map_err(TaskStoreError::remote)?;
    local.map_err(TaskStoreError::local)
}
