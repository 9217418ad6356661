//! Errors raised by the screen runtime and stored on view states.

use thiserror::Error;

use crate::task::services::TaskStoreError;

/// Errors returned by [`ScreenModel`](super::ScreenModel).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// The screen's actor is no longer running.
    #[error("screen has been shut down")]
    Closed,
}

/// Category of a failure shown on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewErrorKind {
    /// The requested task or task list does not exist.
    NotFound,
    /// A data source failed.
    SourceFailure,
}

/// Non-fatal error marker carried by view states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    kind: ViewErrorKind,
    message: String,
}

impl ViewError {
    /// Creates an error marker.
    #[must_use]
    pub fn new(kind: ViewErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ViewErrorKind {
        self.kind
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether the error reports missing data.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == ViewErrorKind::NotFound
    }
}

impl From<&TaskStoreError> for ViewError {
    fn from(err: &TaskStoreError) -> Self {
        let kind = if err.is_not_found() {
            ViewErrorKind::NotFound
        } else {
            ViewErrorKind::SourceFailure
        };
        Self::new(kind, err.to_string())
    }
}

impl From<TaskStoreError> for ViewError {
    fn from(err: TaskStoreError) -> Self {
        Self::from(&err)
    }
}
