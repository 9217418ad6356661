//! Shared helpers for screen tests.

use std::sync::Arc;

use crate::mvi::{ActionProcessor, ResultSink, ScreenContract};
use crate::task::{
    adapters::memory::InMemoryTaskDataSource, domain::Task, services::TaskStore,
};

/// Store type used by every screen test.
pub(super) type MemoryStore = TaskStore<InMemoryTaskDataSource, InMemoryTaskDataSource>;

/// Both data sources plus the store built on top of them.
pub(super) struct Backend {
    pub(super) remote: InMemoryTaskDataSource,
    pub(super) local: InMemoryTaskDataSource,
    pub(super) store: Arc<MemoryStore>,
}

impl Backend {
    /// Builds a backend with both sources empty.
    pub(super) fn empty() -> Self {
        Self::with_sources(InMemoryTaskDataSource::new(), InMemoryTaskDataSource::new())
    }

    /// Builds a backend whose local source holds `tasks`.
    pub(super) fn with_local(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self::with_sources(
            InMemoryTaskDataSource::new(),
            InMemoryTaskDataSource::with_tasks(tasks),
        )
    }

    pub(super) fn with_sources(
        remote: InMemoryTaskDataSource,
        local: InMemoryTaskDataSource,
    ) -> Self {
        let store = Arc::new(TaskStore::new(
            Arc::new(remote.clone()),
            Arc::new(local.clone()),
        ));
        Self {
            remote,
            local,
            store,
        }
    }

    pub(super) fn go_offline(&self) {
        self.remote.set_offline(true).expect("remote offline");
        self.local.set_offline(true).expect("local offline");
    }
}

/// Processes one action to completion and returns every emitted result.
pub(super) async fn run<C, P>(processor: &P, action: C::Action) -> Vec<C::Result>
where
    C: ScreenContract,
    P: ActionProcessor<C>,
{
    let (sink, mut rx) = ResultSink::channel();
    processor.process(action, sink).await;
    let mut results = Vec::new();
    while let Ok(result) = rx.try_recv() {
        results.push(result);
    }
    results
}

/// Folds results from the screen's initial state.
pub(super) fn fold<C: ScreenContract>(results: impl IntoIterator<Item = C::Result>) -> C::State {
    results
        .into_iter()
        .fold(C::initial_state(), |state, result| C::reduce(state, result))
}
