//! Counts tasks for the statistics screen.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use super::{StatisticsAction, StatisticsResult, StatisticsScreen, TaskCounts};
use crate::mvi::{ActionProcessor, Outcome, ResultSink};
use crate::task::{ports::TaskDataSource, services::TaskStore};

/// Action processor of the statistics screen.
pub struct StatisticsActionProcessor<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    store: Arc<TaskStore<R, L>>,
}

impl<R, L> StatisticsActionProcessor<R, L>
where
    R: TaskDataSource,
    L: TaskDataSource,
{
    /// Creates a processor backed by `store`.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<R, L>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<R, L> ActionProcessor<StatisticsScreen> for StatisticsActionProcessor<R, L>
where
    R: TaskDataSource + 'static,
    L: TaskDataSource + 'static,
{
    #[instrument(level = "debug", skip(self, results))]
    async fn process(&self, action: StatisticsAction, results: ResultSink<StatisticsResult>) {
        match action {
            StatisticsAction::LoadStatistics => {
                results.emit(StatisticsResult::Load(Outcome::InFlight));
                let counts = self
                    .store
                    .get_tasks(false)
                    .await
                    .map(|tasks| TaskCounts::of(&tasks));
                results.emit(StatisticsResult::Load(Outcome::settle(counts)));
            }
        }
    }
}
