//! The application's screens.
//!
//! Each screen module defines its intents, actions and results, a
//! [`ScreenContract`](crate::mvi::ScreenContract) implementation tying them
//! together, an action processor talking to the task store, and an immutable
//! view state with its reducer.
//!
//! - [`tasks`]: the filtered task list
//! - [`task_detail`]: one task with complete, activate and delete
//! - [`add_edit_task`]: the create and edit form
//! - [`statistics`]: active and completed counts

pub mod add_edit_task;
pub mod statistics;
pub mod task_detail;
pub mod tasks;

#[cfg(test)]
mod tests;
