//! Then steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, run_async};
use rstest_bdd_macros::then;
use todo_mvi::task::{domain::Task, ports::TaskDataSource, services::TaskStoreError};

#[then("the task list has {count:usize} task")]
fn task_list_has(world: &TaskStoreWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = world.listed()?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then("every listed task is completed")]
fn every_task_completed(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let tasks = world.listed()?;
    eyre::ensure!(
        tasks.iter().all(|task| task.is_completed() && !task.is_active()),
        "expected only completed tasks, found {tasks:?}"
    );
    Ok(())
}

#[then(r#"the task list contains only "{title}""#)]
fn task_list_contains_only(world: &TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let titles: Vec<&str> = world.listed()?.iter().map(Task::title).collect();
    eyre::ensure!(
        titles == [title.as_str()],
        "expected only {title:?}, found {titles:?}"
    );
    Ok(())
}

#[then(r#"the local source holds "{title}""#)]
fn local_source_holds(world: &TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let stored = run_async(world.local.get_tasks())?;
    eyre::ensure!(
        stored.iter().any(|task| task.title() == title),
        "expected {title:?} in the local source, found {stored:?}"
    );
    Ok(())
}

#[then("the lookup fails with not found")]
fn lookup_not_found(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    match world.last_lookup.as_ref() {
        Some(Err(TaskStoreError::NotFound(_))) => Ok(()),
        other => Err(eyre::eyre!("expected a not found error, found {other:?}")),
    }
}

#[then("the list request fails with not found")]
fn list_not_found(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    match world.last_list.as_ref() {
        Some(Err(err)) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected a not found error, found {other:?}")),
    }
}

#[then("the cache is empty")]
fn cache_is_empty(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let cached = run_async(world.store.cached_tasks());
    eyre::ensure!(cached.is_empty(), "expected an empty cache, found {cached:?}");
    Ok(())
}
