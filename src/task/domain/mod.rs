//! Domain model for to-do tasks.
//!
//! Tasks are immutable values identified by an opaque string. Filtering is a
//! pure function over a full task list.

mod filter;
mod ids;
mod task;

pub use filter::TasksFilterType;
pub use ids::TaskId;
pub use task::Task;
