//! When steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todo_mvi::task::domain::{Task, TaskId};

#[when(r#"a task titled "{title}" with no description is saved"#)]
fn save_task(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let task = Task::new(title, "");
    run_async(world.store.save_task(task.clone())).wrap_err("save task")?;
    world.last_saved = Some(task);
    Ok(())
}

#[when("the saved task is completed by id")]
fn complete_saved_task(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_saved
        .as_ref()
        .map(|task| task.id().clone())
        .ok_or_else(|| eyre::eyre!("missing saved task in scenario world"))?;
    run_async(world.store.complete_task_by_id(&id)).wrap_err("complete task")?;
    Ok(())
}

#[when("the task list is requested")]
fn request_task_list(world: &mut TaskStoreWorld) {
    world.last_list = Some(run_async(world.store.get_tasks(false)));
}

#[when("completed tasks are cleared")]
fn clear_completed(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    run_async(world.store.clear_completed_tasks()).wrap_err("clear completed tasks")?;
    Ok(())
}

#[when(r#"task "{id}" is requested"#)]
fn request_task(world: &mut TaskStoreWorld, id: String) {
    world.last_lookup = Some(run_async(world.store.get_task(&TaskId::from_string(id))));
}

#[when("the store is refreshed")]
fn refresh_store(world: &mut TaskStoreWorld) {
    run_async(world.store.refresh_tasks());
}
