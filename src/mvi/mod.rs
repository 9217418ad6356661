//! Generic intent → action → result → state runtime shared by every screen.
//!
//! A screen is described by a [`ScreenContract`] (its intent, action, result
//! and state types plus the pure mapping and folding functions) and an
//! [`ActionProcessor`] that turns actions into results against the task
//! store. [`ScreenModel`] runs the pipeline as one actor per screen and
//! publishes each distinct state through a `tokio::sync::watch` channel.

mod contract;
mod error;
mod model;
mod outcome;
mod sink;

pub use contract::{ActionProcessor, ScreenContract};
pub use error::{ScreenError, ViewError, ViewErrorKind};
pub use model::ScreenModel;
pub use outcome::Outcome;
pub use sink::ResultSink;
