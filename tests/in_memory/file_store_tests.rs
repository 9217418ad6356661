//! Task store over a JSON file local source.

use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use todo_mvi::task::{
    adapters::{file::JsonFileTaskDataSource, memory::InMemoryTaskDataSource},
    domain::Task,
    services::TaskStore,
};

struct DataDir {
    _tmp: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn data_dir() -> DataDir {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(tmp.path().join("todo")).expect("utf-8 temp path");
    DataDir { _tmp: tmp, path }
}

fn store_at(
    dir: &DataDir,
    remote: InMemoryTaskDataSource,
) -> eyre::Result<TaskStore<InMemoryTaskDataSource, JsonFileTaskDataSource>> {
    let local = JsonFileTaskDataSource::open(&dir.path)?;
    Ok(TaskStore::new(Arc::new(remote), Arc::new(local)))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remote_tasks_survive_a_restart_without_the_remote(data_dir: DataDir) -> eyre::Result<()> {
    let first_run = store_at(&data_dir, InMemoryTaskDataSource::seeded_remote(Duration::ZERO))?;
    let fetched = first_run.get_tasks(false).await?;

    let remote = InMemoryTaskDataSource::new();
    remote.set_offline(true)?;
    let second_run = store_at(&data_dir, remote)?;

    assert_eq!(second_run.get_tasks(false).await?, fetched);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn writes_reach_the_file_and_the_remote(data_dir: DataDir) -> eyre::Result<()> {
    let remote = InMemoryTaskDataSource::new();
    let store = store_at(&data_dir, remote.clone())?;
    let task = Task::new("Water the plants", "");

    store.save_task(task.clone()).await?;
    store.complete_task(&task).await?;

    let reopened = store_at(&data_dir, InMemoryTaskDataSource::new())?;
    assert_eq!(reopened.get_task(task.id()).await?, task.completed());
    assert_eq!(
        todo_mvi::task::ports::TaskDataSource::get_tasks(&remote).await?,
        vec![task.completed()]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_completed_tasks_rewrites_the_file(data_dir: DataDir) -> eyre::Result<()> {
    let store = store_at(&data_dir, InMemoryTaskDataSource::new())?;
    let keep = Task::new("Keep", "");
    let done = Task::new("Done", "").completed();
    store.save_task(keep.clone()).await?;
    store.save_task(done).await?;

    store.clear_completed_tasks().await?;

    let reopened = store_at(&data_dir, InMemoryTaskDataSource::new())?;
    assert_eq!(reopened.get_tasks(false).await?, vec![keep]);
    Ok(())
}
