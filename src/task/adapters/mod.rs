//! Adapter implementations for the task data source port.

pub mod file;
pub mod memory;
