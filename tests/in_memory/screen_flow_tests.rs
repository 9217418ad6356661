//! Screens driven end to end through their models.

use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;
use todo_mvi::mvi::ScreenModel;
use todo_mvi::screens::{
    add_edit_task::{AddEditTaskActionProcessor, AddEditTaskIntent, AddEditTaskScreen},
    statistics::{StatisticsActionProcessor, StatisticsIntent, StatisticsScreen},
    task_detail::{
        TaskDetailActionProcessor, TaskDetailIntent, TaskDetailNotification, TaskDetailScreen,
    },
    tasks::{TasksActionProcessor, TasksIntent, TasksScreen},
};
use todo_mvi::task::{
    domain::{Task, TasksFilterType},
    ports::TaskDataSource,
};

use super::helpers::{seeded_store, settle};

const NOTIFICATION_DELAY: Duration = Duration::from_secs(2);

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn initial_load_pulls_the_remote_list_and_persists_it() -> eyre::Result<()> {
    let (store, local) = seeded_store(Duration::ZERO);
    let tasks = ScreenModel::<TasksScreen>::spawn(Arc::new(TasksActionProcessor::new(
        Arc::clone(&store),
        NOTIFICATION_DELAY,
    )));

    tasks.process_intent(TasksIntent::Initial)?;
    let state = settle(&tasks, |s| !s.tasks.is_empty()).await?;

    let titles: Vec<&str> = state.tasks.iter().map(Task::title).collect();
    assert_eq!(titles, ["Build tower in Pisa", "Finish bridge in Tacoma"]);
    assert_eq!(state.filter, TasksFilterType::All);
    assert!(!state.is_loading);
    assert_eq!(local.get_tasks().await?, state.tasks);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_saved_in_the_editor_show_up_in_the_list() -> eyre::Result<()> {
    let (store, _local) = seeded_store(Duration::ZERO);
    let tasks = ScreenModel::<TasksScreen>::spawn(Arc::new(TasksActionProcessor::new(
        Arc::clone(&store),
        NOTIFICATION_DELAY,
    )));
    let editor = ScreenModel::<AddEditTaskScreen>::spawn(Arc::new(
        AddEditTaskActionProcessor::new(Arc::clone(&store)),
    ));

    tasks.process_intent(TasksIntent::Initial)?;
    settle(&tasks, |s| s.tasks.len() == 2).await?;
    editor.process_intent(AddEditTaskIntent::SaveTask {
        task_id: None,
        title: "Paint the fence".to_owned(),
        description: String::new(),
    })?;
    settle(&editor, |s| s.is_saved).await?;
    tasks.process_intent(TasksIntent::Refresh {
        force_update: false,
    })?;

    let state = settle(&tasks, |s| s.tasks.len() == 3).await?;
    assert_eq!(
        state.tasks.last().map(Task::title),
        Some("Paint the fence")
    );
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn a_filter_change_during_the_initial_load_is_not_lost() -> eyre::Result<()> {
    let (store, _local) = seeded_store(Duration::from_secs(5));
    let tasks = ScreenModel::<TasksScreen>::spawn(Arc::new(TasksActionProcessor::new(
        Arc::clone(&store),
        NOTIFICATION_DELAY,
    )));

    tasks.process_intents([
        TasksIntent::Initial,
        TasksIntent::ChangeFilter(TasksFilterType::Completed),
    ])?;

    let state = settle(&tasks, |s| {
        !s.is_loading && s.filter == TasksFilterType::Completed
    })
    .await?;
    assert!(state.tasks.is_empty());
    assert_eq!(store.cached_tasks().await.len(), 2);
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn completing_from_the_detail_screen_flashes_a_notification() -> eyre::Result<()> {
    let (store, _local) = seeded_store(Duration::ZERO);
    let first = store
        .get_tasks(false)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("seeded remote is empty"))?;
    let detail = ScreenModel::<TaskDetailScreen>::spawn(Arc::new(
        TaskDetailActionProcessor::new(Arc::clone(&store), NOTIFICATION_DELAY),
    ));

    detail.process_intent(TaskDetailIntent::Initial(first.id().clone()))?;
    settle(&detail, |s| s.active && !s.loading).await?;
    detail.process_intent(TaskDetailIntent::CompleteTask(first.id().clone()))?;

    let shown = settle(&detail, |s| s.ui_notification.is_some()).await?;
    assert_eq!(
        shown.ui_notification,
        Some(TaskDetailNotification::TaskComplete)
    );
    assert!(!shown.active);
    let hidden_at = tokio::time::Instant::now();
    let hidden = settle(&detail, |s| s.ui_notification.is_none()).await?;
    assert!(hidden_at.elapsed() >= NOTIFICATION_DELAY - Duration::from_millis(1));
    assert!(!hidden.active);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn statistics_reflect_updates_made_on_other_screens() -> eyre::Result<()> {
    let (store, _local) = seeded_store(Duration::ZERO);
    let tasks = ScreenModel::<TasksScreen>::spawn(Arc::new(TasksActionProcessor::new(
        Arc::clone(&store),
        Duration::ZERO,
    )));
    tasks.process_intent(TasksIntent::Initial)?;
    let listed = settle(&tasks, |s| s.tasks.len() == 2).await?;
    let first = listed
        .tasks
        .first()
        .ok_or_else(|| eyre::eyre!("no tasks listed"))?
        .clone();
    tasks.process_intent(TasksIntent::CompleteTask(first))?;
    settle(&tasks, |s| s.tasks.iter().any(Task::is_completed)).await?;

    let statistics = ScreenModel::<StatisticsScreen>::spawn(Arc::new(
        StatisticsActionProcessor::new(Arc::clone(&store)),
    ));
    statistics.process_intent(StatisticsIntent::Initial)?;

    let state = settle(&statistics, |s| !s.is_loading && s.completed_count > 0).await?;
    assert_eq!((state.active_count, state.completed_count), (1, 1));
    Ok(())
}
