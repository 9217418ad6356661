//! Given steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_mvi::task::{
    adapters::memory::InMemoryTaskDataSource, domain::Task, ports::TaskDataSource,
};

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskStoreWorld) {
    *world = TaskStoreWorld::new();
}

#[given(r#"a task store holding active task "{active}" and completed tasks "{first}" and "{second}""#)]
fn store_with_mixed_tasks(
    world: &mut TaskStoreWorld,
    active: String,
    first: String,
    second: String,
) {
    let local = InMemoryTaskDataSource::with_tasks([
        Task::new(active, ""),
        Task::new(first, "").completed(),
        Task::new(second, "").completed(),
    ]);
    *world = TaskStoreWorld::with_sources(InMemoryTaskDataSource::new(), local);
}

#[given(r#"a task store whose local source holds task "{title}""#)]
fn store_with_local_task(world: &mut TaskStoreWorld, title: String) {
    let local = InMemoryTaskDataSource::with_tasks([Task::new(title, "")]);
    *world = TaskStoreWorld::with_sources(InMemoryTaskDataSource::new(), local);
}

#[given("the task list has been loaded")]
fn task_list_loaded(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    run_async(world.store.get_tasks(false)).wrap_err("initial task list load")?;
    Ok(())
}

#[given(r#"the remote source holds task "{title}""#)]
fn remote_holds_task(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    run_async(world.remote.save_task(&Task::new(title, ""))).wrap_err("seed remote task")?;
    Ok(())
}
