//! todo-mvi: the data and presentation core of a to-do application.
//!
//! The crate ends at immutable view states and typed intents; rendering is
//! left to whatever front end drives it.
//!
//! # Architecture
//!
//! Task access follows hexagonal architecture principles:
//!
//! - **Domain**: tasks, identifiers and list filters
//! - **Ports**: the data source contract shared by remote and local storage
//! - **Adapters**: in-memory and JSON file data sources
//! - **Services**: the caching task store
//!
//! Screens follow a unidirectional intent → action → result → state flow
//! driven by one actor per screen.
//!
//! # Modules
//!
//! - [`task`]: task domain, storage ports, adapters and the task store
//! - [`mvi`]: the generic screen runtime
//! - [`screens`]: task list, detail, editor and statistics screens
//! - [`config`]: runtime configuration

pub mod config;
pub mod mvi;
pub mod screens;
pub mod task;
