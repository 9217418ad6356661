//! Step definitions for task store scenarios.

pub mod world;

mod given;
mod then;
mod when;
