//! Per-screen actor folding results into published view states.

use std::sync::Arc;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, trace, warn};

use super::{
    contract::{ActionProcessor, ScreenContract},
    error::ScreenError,
    sink::ResultSink,
};

/// Running pipeline for one screen.
///
/// Intents are queued on an unbounded channel and handled by a dedicated
/// actor task. Each action runs as its own task; their results are merged and
/// folded strictly in arrival order. A state is published only when it
/// differs from the previous one, and the latest state is always available to
/// new subscribers.
///
/// Dropping the model stops the actor. Actions that are already running are
/// left to finish, but their results are discarded.
#[derive(Debug)]
pub struct ScreenModel<C: ScreenContract> {
    intents: mpsc::UnboundedSender<C::Intent>,
    states: watch::Receiver<C::State>,
    actor: JoinHandle<()>,
}

impl<C: ScreenContract> ScreenModel<C> {
    /// Starts the screen's actor on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn spawn<P>(processor: Arc<P>) -> Self
    where
        P: ActionProcessor<C>,
    {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(C::initial_state());
        let actor = tokio::spawn(ScreenActor::<C, P>::new(processor, state_tx).run(intent_rx));

        Self {
            intents: intent_tx,
            states: state_rx,
            actor,
        }
    }

    /// Queues an intent for processing.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Closed`] when the actor has stopped.
    pub fn process_intent(&self, intent: C::Intent) -> Result<(), ScreenError> {
        self.intents.send(intent).map_err(|_| ScreenError::Closed)
    }

    /// Queues several intents in order.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Closed`] when the actor has stopped.
    pub fn process_intents<I>(&self, intents: I) -> Result<(), ScreenError>
    where
        I: IntoIterator<Item = C::Intent>,
    {
        intents
            .into_iter()
            .try_for_each(|intent| self.process_intent(intent))
    }

    /// Subscribes to published states, starting from the latest one.
    #[must_use]
    pub fn states(&self) -> watch::Receiver<C::State> {
        self.states.clone()
    }

    /// Returns a snapshot of the latest published state.
    #[must_use]
    pub fn current_state(&self) -> C::State {
        self.states.borrow().clone()
    }

    /// Stops the actor and discards any results still to come.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl<C: ScreenContract> Drop for ScreenModel<C> {
    fn drop(&mut self) {
        self.actor.abort();
    }
}

struct ScreenActor<C: ScreenContract, P> {
    processor: Arc<P>,
    states: watch::Sender<C::State>,
    sink: ResultSink<C::Result>,
    results: mpsc::UnboundedReceiver<C::Result>,
    load_done_tx: mpsc::UnboundedSender<()>,
    load_done_rx: mpsc::UnboundedReceiver<()>,
    seen_initial: bool,
    load_running: bool,
    parked_load: Option<C::Action>,
}

impl<C, P> ScreenActor<C, P>
where
    C: ScreenContract,
    P: ActionProcessor<C>,
{
    fn new(processor: Arc<P>, states: watch::Sender<C::State>) -> Self {
        let (sink, results) = ResultSink::channel();
        let (load_done_tx, load_done_rx) = mpsc::unbounded_channel();
        Self {
            processor,
            states,
            sink,
            results,
            load_done_tx,
            load_done_rx,
            seen_initial: false,
            load_running: false,
            parked_load: None,
        }
    }

    async fn run(mut self, mut intents: mpsc::UnboundedReceiver<C::Intent>) {
        let mut state = C::initial_state();
        loop {
            tokio::select! {
                biased;
                Some(result) = self.results.recv() => {
                    state = self.fold(state, result);
                }
                Some(()) = self.load_done_rx.recv() => self.finish_load(),
                received = intents.recv() => match received {
                    Some(intent) => self.accept(intent),
                    None => break,
                },
            }
        }
        debug!("screen intents closed; actor stopping");
    }

    fn fold(&self, state: C::State, result: C::Result) -> C::State {
        trace!(?result, "folding result");
        let next = C::reduce(state, result);
        self.states.send_if_modified(|published| {
            if *published == next {
                false
            } else {
                published.clone_from(&next);
                true
            }
        });
        next
    }

    fn accept(&mut self, intent: C::Intent) {
        if C::is_initial_intent(&intent) {
            if self.seen_initial {
                debug!(?intent, "ignoring repeated initial intent");
                return;
            }
            self.seen_initial = true;
        }

        let Some(action) = C::action_from_intent(intent) else {
            debug!("intent maps to no action");
            return;
        };

        if !C::is_load_action(&action) {
            self.dispatch(action, false);
            return;
        }

        if self.load_running {
            if let Some(superseded) = self.parked_load.replace(action) {
                warn!(?superseded, "dropping load superseded by a newer one");
            } else {
                debug!("load in flight; parking the next one");
            }
            return;
        }

        self.load_running = true;
        self.dispatch(action, true);
    }

    fn finish_load(&mut self) {
        match self.parked_load.take() {
            Some(action) => self.dispatch(action, true),
            None => self.load_running = false,
        }
    }

    fn dispatch(&self, action: C::Action, is_load: bool) {
        debug!(?action, "dispatching action");
        let processor = Arc::clone(&self.processor);
        let sink = self.sink.clone();
        let load_done = is_load.then(|| self.load_done_tx.clone());
        tokio::spawn(async move {
            processor.process(action, sink).await;
            let Some(done) = load_done else { return };
            if done.send(()).is_err() {
                trace!("screen torn down before load completed");
            }
        });
    }
}
