//! Port contracts for task data sources.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod data_source;

pub use data_source::{TaskDataSource, TaskDataSourceError, TaskDataSourceResult};

#[cfg(test)]
pub use data_source::MockTaskDataSource;
