//! Application services for task access.

mod cache;
mod store;

pub use store::{Missing, SourceTier, TaskStore, TaskStoreError, TaskStoreResult};
