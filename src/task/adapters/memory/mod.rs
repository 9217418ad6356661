//! In-memory task data source.

mod data_source;

pub use data_source::InMemoryTaskDataSource;
