//! Persistent local data source storing tasks as a JSON document.
//!
//! The data source only touches files inside the directory handed to it.
//! Every mutation rewrites the whole document through a temporary file and a
//! rename, so readers never observe a partially written list.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskDataSource, TaskDataSourceError, TaskDataSourceResult},
};

/// Name of the document holding the task list.
pub const TASKS_FILE_NAME: &str = "tasks.json";
const TASKS_TMP_FILE_NAME: &str = "tasks.json.tmp";

#[derive(Debug, Default, Serialize, Deserialize)]
struct TaskDocument {
    tasks: Vec<Task>,
}

/// Task data source backed by a JSON file in a capability-scoped directory.
#[derive(Debug, Clone)]
pub struct JsonFileTaskDataSource {
    dir: Arc<Dir>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileTaskDataSource {
    /// Opens (creating when needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDataSourceError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> TaskDataSourceResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(TaskDataSourceError::storage)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(TaskDataSourceError::storage)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self {
            dir: Arc::new(dir),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> TaskDataSourceResult<Vec<Task>> {
        let dir = Arc::clone(&self.dir);
        run_blocking(move || read_document(&dir)).await
    }

    async fn store(&self, tasks: Vec<Task>) -> TaskDataSourceResult<()> {
        let dir = Arc::clone(&self.dir);
        run_blocking(move || write_document(&dir, tasks)).await
    }

    /// Applies `update` to the stored list under the write lock.
    async fn modify(
        &self,
        update: impl FnOnce(&mut Vec<Task>) -> TaskDataSourceResult<()> + Send,
    ) -> TaskDataSourceResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.load().await?;
        update(&mut tasks)?;
        self.store(tasks).await
    }
}

async fn run_blocking<T, F>(operation: F) -> TaskDataSourceResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> TaskDataSourceResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|err| TaskDataSourceError::storage(io::Error::other(err.to_string())))?
}

fn read_document(dir: &Dir) -> TaskDataSourceResult<Vec<Task>> {
    match dir.read_to_string(TASKS_FILE_NAME) {
        Ok(contents) => {
            let document: TaskDocument =
                serde_json::from_str(&contents).map_err(TaskDataSourceError::storage)?;
            Ok(document.tasks)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(TaskDataSourceError::storage(err)),
    }
}

fn write_document(dir: &Dir, tasks: Vec<Task>) -> TaskDataSourceResult<()> {
    let contents = serde_json::to_vec_pretty(&TaskDocument { tasks })
        .map_err(TaskDataSourceError::storage)?;
    dir.write(TASKS_TMP_FILE_NAME, contents)
        .map_err(TaskDataSourceError::storage)?;
    dir.rename(TASKS_TMP_FILE_NAME, dir, TASKS_FILE_NAME)
        .map_err(TaskDataSourceError::storage)
}

fn upsert(tasks: &mut Vec<Task>, task: Task) {
    if let Some(slot) = tasks.iter_mut().find(|existing| existing.id() == task.id()) {
        *slot = task;
    } else {
        tasks.push(task);
    }
}

fn update_by_id(
    tasks: &mut [Task],
    id: &TaskId,
    update: fn(&Task) -> Task,
) -> TaskDataSourceResult<()> {
    let slot = tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or_else(|| TaskDataSourceError::NotFound(id.clone()))?;
    *slot = update(&*slot);
    Ok(())
}

#[async_trait]
impl TaskDataSource for JsonFileTaskDataSource {
    async fn get_tasks(&self) -> TaskDataSourceResult<Vec<Task>> {
        self.load().await
    }

    async fn get_task(&self, id: &TaskId) -> TaskDataSourceResult<Option<Task>> {
        let tasks = self.load().await?;
        Ok(tasks.into_iter().find(|task| task.id() == id))
    }

    async fn save_task(&self, task: &Task) -> TaskDataSourceResult<()> {
        let task = task.clone();
        self.modify(move |tasks| {
            upsert(tasks, task);
            Ok(())
        })
        .await
    }

    async fn complete_task(&self, task: &Task) -> TaskDataSourceResult<()> {
        let task = task.completed();
        self.modify(move |tasks| {
            upsert(tasks, task);
            Ok(())
        })
        .await
    }

    async fn complete_task_by_id(&self, id: &TaskId) -> TaskDataSourceResult<()> {
        self.modify(|tasks| update_by_id(tasks, id, Task::completed))
            .await
    }

    async fn activate_task(&self, task: &Task) -> TaskDataSourceResult<()> {
        let task = task.activated();
        self.modify(move |tasks| {
            upsert(tasks, task);
            Ok(())
        })
        .await
    }

    async fn activate_task_by_id(&self, id: &TaskId) -> TaskDataSourceResult<()> {
        self.modify(|tasks| update_by_id(tasks, id, Task::activated))
            .await
    }

    async fn clear_completed_tasks(&self) -> TaskDataSourceResult<()> {
        self.modify(|tasks| {
            tasks.retain(Task::is_active);
            Ok(())
        })
        .await
    }

    async fn delete_task(&self, id: &TaskId) -> TaskDataSourceResult<()> {
        self.modify(|tasks| {
            tasks.retain(|task| task.id() != id);
            Ok(())
        })
        .await
    }

    async fn delete_all_tasks(&self) -> TaskDataSourceResult<()> {
        self.modify(|tasks| {
            tasks.clear();
            Ok(())
        })
        .await
    }
}
