//! Result channel handed to action processors.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

/// Sending half of a screen's merged result stream.
///
/// Sends never fail loudly: once the owning screen has been torn down its
/// results are discarded.
#[derive(Debug)]
pub struct ResultSink<R> {
    tx: mpsc::UnboundedSender<R>,
}

impl<R> Clone for ResultSink<R> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<R: Send + 'static> ResultSink<R> {
    /// Creates a sink together with the receiver that collects its results.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<R>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emits a result.
    pub fn emit(&self, result: R) {
        if self.tx.send(result).is_err() {
            trace!("screen torn down; discarding result");
        }
    }

    /// Emits a result after `delay`.
    ///
    /// The wait is skipped when the screen has already gone away.
    pub async fn emit_after(&self, delay: Duration, result: R) {
        if self.is_closed() {
            trace!("screen torn down; skipping delayed result");
            return;
        }
        tokio::time::sleep(delay).await;
        self.emit(result);
    }

    /// Returns whether the receiving screen has been torn down.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
