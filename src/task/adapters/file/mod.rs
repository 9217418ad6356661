//! JSON file task data source.

mod data_source;

pub use data_source::{JsonFileTaskDataSource, TASKS_FILE_NAME};
