//! Scripted walk through every screen against the configured task store.
//!
//! Usage:
//!
//! ```text
//! todo_mvi [config-path]
//! ```
//!
//! The optional JSON file at `config-path` deserializes into a
//! [`TodoConfig`]; `TODO_MVI_*` environment variables override it. Logging is
//! controlled by `TODO_MVI_LOG` (an `EnvFilter` directive) and
//! `TODO_MVI_LOG_FORMAT` (`compact` or `json`). Every view state a screen
//! publishes is logged at `info` level.

use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use thiserror::Error;
use tokio::runtime::Builder;
use tokio::task::JoinHandle;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use todo_mvi::config::{ConfigError, TodoConfig};
use todo_mvi::mvi::{ScreenContract, ScreenError, ScreenModel};
use todo_mvi::screens::{
    add_edit_task::{AddEditTaskActionProcessor, AddEditTaskIntent, AddEditTaskScreen},
    statistics::{StatisticsActionProcessor, StatisticsIntent, StatisticsScreen},
    task_detail::{TaskDetailActionProcessor, TaskDetailIntent, TaskDetailScreen},
    tasks::{TasksActionProcessor, TasksIntent, TasksScreen},
};
use todo_mvi::task::{
    adapters::{file::JsonFileTaskDataSource, memory::InMemoryTaskDataSource},
    domain::TasksFilterType,
    ports::{TaskDataSource, TaskDataSourceError},
    services::TaskStore,
};

const LOG_ENV: &str = "TODO_MVI_LOG";
const LOG_FORMAT_ENV: &str = "TODO_MVI_LOG_FORMAT";
const SETTLE_GRACE: Duration = Duration::from_secs(10);

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open local task storage: {0}")]
    Storage(#[from] TaskDataSourceError),
    #[error(transparent)]
    Screen(#[from] ScreenError),
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("{0} screen did not settle in time")]
    Timeout(&'static str),
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let config_path = config_path_arg()?;
    let config = TodoConfig::load(config_path.as_deref())?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(DemoError::Runtime)?;
    runtime.block_on(run(&config)).map_err(Into::into)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("todo_mvi=info,todo_mvi::task=warn"));
    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "compact".to_owned());
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => registry.with(fmt::layer().json().with_ansi(false)).init(),
        _ => registry.with(fmt::layer().compact()).init(),
    }
}

fn config_path_arg() -> Result<Option<Utf8PathBuf>, DemoError> {
    let mut args = env::args_os().skip(1);
    let path = args
        .next()
        .map(|arg| {
            arg.into_string()
                .map(Utf8PathBuf::from)
                .map_err(|_| DemoError::InvalidArgs("config path is not valid UTF-8".to_owned()))
        })
        .transpose()?;
    if args.next().is_some() {
        return Err(DemoError::InvalidArgs(
            "expected at most one argument: [config-path]".to_owned(),
        ));
    }
    Ok(path)
}

async fn run(config: &TodoConfig) -> Result<(), DemoError> {
    let remote = InMemoryTaskDataSource::seeded_remote(config.remote_latency());
    match &config.data_dir {
        Some(dir) => {
            info!(data_dir = %dir, "storing local tasks on disk");
            let local = JsonFileTaskDataSource::open(dir)?;
            walk_screens(config, remote, local).await
        }
        None => {
            info!("storing local tasks in memory");
            walk_screens(config, remote, InMemoryTaskDataSource::new()).await
        }
    }
}

#[instrument(skip_all)]
async fn walk_screens<R, L>(config: &TodoConfig, remote: R, local: L) -> Result<(), DemoError>
where
    R: TaskDataSource + 'static,
    L: TaskDataSource + 'static,
{
    let store = Arc::new(TaskStore::new(Arc::new(remote), Arc::new(local)));
    let delay = config.notification_delay();
    let timeout = config.remote_latency() + delay + SETTLE_GRACE;

    let tasks = ScreenModel::<TasksScreen>::spawn(Arc::new(TasksActionProcessor::new(
        Arc::clone(&store),
        delay,
    )));
    let tasks_log = log_states("tasks", &tasks);
    tasks.process_intent(TasksIntent::Initial)?;
    let listed = settle("tasks", &tasks, timeout, |s| {
        !s.is_loading && (!s.tasks.is_empty() || s.error.is_some())
    })
    .await?;

    let editor = ScreenModel::<AddEditTaskScreen>::spawn(Arc::new(
        AddEditTaskActionProcessor::new(Arc::clone(&store)),
    ));
    let editor_log = log_states("add_edit_task", &editor);
    editor.process_intents([
        AddEditTaskIntent::Initial(None),
        AddEditTaskIntent::SaveTask {
            task_id: None,
            title: String::new(),
            description: String::new(),
        },
    ])?;
    settle("add_edit_task", &editor, timeout, |s| s.is_empty).await?;
    editor.process_intent(AddEditTaskIntent::SaveTask {
        task_id: None,
        title: "Write the release notes".to_owned(),
        description: "Cover the new statistics screen.".to_owned(),
    })?;
    settle("add_edit_task", &editor, timeout, |s| s.is_saved).await?;

    if let Some(first) = listed.tasks.first() {
        let detail = ScreenModel::<TaskDetailScreen>::spawn(Arc::new(
            TaskDetailActionProcessor::new(Arc::clone(&store), delay),
        ));
        let detail_log = log_states("task_detail", &detail);
        detail.process_intent(TaskDetailIntent::Initial(first.id().clone()))?;
        settle("task_detail", &detail, timeout, |s| !s.loading && !s.title.is_empty()).await?;
        detail.process_intent(TaskDetailIntent::CompleteTask(first.id().clone()))?;
        settle("task_detail", &detail, timeout, |s| !s.updating && !s.active).await?;
        detail_log.abort();
    }

    tasks.process_intents([
        TasksIntent::Refresh {
            force_update: false,
        },
        TasksIntent::ChangeFilter(TasksFilterType::Active),
    ])?;
    settle("tasks", &tasks, timeout, |s| {
        !s.is_loading && s.filter == TasksFilterType::Active
    })
    .await?;

    let statistics = ScreenModel::<StatisticsScreen>::spawn(Arc::new(
        StatisticsActionProcessor::new(Arc::clone(&store)),
    ));
    let statistics_log = log_states("statistics", &statistics);
    statistics.process_intent(StatisticsIntent::Initial)?;
    let counts = settle("statistics", &statistics, timeout, |s| {
        !s.is_loading && (s.active_count + s.completed_count > 0 || s.error.is_some())
    })
    .await?;
    info!(
        active = counts.active_count,
        completed = counts.completed_count,
        "walk-through finished"
    );

    for handle in [tasks_log, editor_log, statistics_log] {
        handle.abort();
    }
    Ok(())
}

/// Logs every state the screen publishes until the screen goes away.
fn log_states<C: ScreenContract>(screen: &'static str, model: &ScreenModel<C>) -> JoinHandle<()> {
    let mut states = model.states();
    tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            info!(screen, ?state, "view state");
        }
    })
}

/// Waits until the screen publishes a state matching `ready`.
async fn settle<C: ScreenContract>(
    screen: &'static str,
    model: &ScreenModel<C>,
    timeout: Duration,
    ready: impl FnMut(&C::State) -> bool,
) -> Result<C::State, DemoError> {
    let mut states = model.states();
    let reached = tokio::time::timeout(timeout, states.wait_for(ready))
        .await
        .map_err(|_| DemoError::Timeout(screen))?
        .map_err(|_| ScreenError::Closed)?;
    Ok(reached.clone())
}

