//! Shared helpers for in-memory integration tests.

use std::sync::Arc;
use std::time::Duration;

use todo_mvi::mvi::{ScreenContract, ScreenModel};
use todo_mvi::task::{adapters::memory::InMemoryTaskDataSource, services::TaskStore};

/// Store type shared by every screen in these tests.
pub type MemoryStore = TaskStore<InMemoryTaskDataSource, InMemoryTaskDataSource>;

/// Upper bound on how long a screen may take to settle.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds a store over the sample remote and an empty local source.
pub fn seeded_store(latency: Duration) -> (Arc<MemoryStore>, InMemoryTaskDataSource) {
    let local = InMemoryTaskDataSource::new();
    let store = TaskStore::new(
        Arc::new(InMemoryTaskDataSource::seeded_remote(latency)),
        Arc::new(local.clone()),
    );
    (Arc::new(store), local)
}

/// Waits until the screen publishes a state matching `ready`.
///
/// # Errors
///
/// Returns an error when the screen stops or does not settle in time.
pub async fn settle<C: ScreenContract>(
    model: &ScreenModel<C>,
    ready: impl FnMut(&C::State) -> bool,
) -> eyre::Result<C::State> {
    let mut states = model.states();
    let reached = tokio::time::timeout(SETTLE_TIMEOUT, states.wait_for(ready))
        .await
        .map_err(|_| eyre::eyre!("screen did not settle within {SETTLE_TIMEOUT:?}"))?
        .map_err(|_| eyre::eyre!("screen stopped before settling"))?;
    Ok(reached.clone())
}
