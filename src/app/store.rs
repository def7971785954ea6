use super::{update, State};
use crate::message::Message;
use crate::operations::uploads::UploadRegistry;
use crate::web::SharedClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Deferred work that needs the whole store, e.g. an async task that wants to
/// invoke another action creator once it completes.
pub type Thunk = Box<dyn FnOnce(&mut Store) + Send>;

enum Envelope {
    Message(Message),
    Thunk(Thunk),
}

/// Cloneable handle spawned tasks use to send work back to the store.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Envelope>,
    ids: Arc<AtomicU64>,
}

impl Dispatcher {
    pub fn dispatch(&self, msg: Message) {
        // The receiver only goes away when the store is dropped on shutdown.
        let _ = self.tx.send(Envelope::Message(msg));
    }

    pub fn dispatch_thunk<F>(&self, thunk: F)
    where
        F: FnOnce(&mut Store) + Send + 'static,
    {
        let _ = self.tx.send(Envelope::Thunk(Box::new(thunk)));
    }

    /// Monotonic id shared by listing requests and alerts.
    pub fn next_id(&self) -> u64 {
        self.ids.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Owns the state tree and is its only writer.
pub struct Store {
    state: State,
    dispatcher: Dispatcher,
    inbox: mpsc::UnboundedReceiver<Envelope>,
    client: SharedClient,
    pub uploads: UploadRegistry,
}

impl Store {
    pub fn new(client: SharedClient) -> Self {
        let (tx, inbox) = mpsc::unbounded_channel();
        Self {
            state: State::default(),
            dispatcher: Dispatcher {
                tx,
                ids: Arc::new(AtomicU64::new(0)),
            },
            inbox,
            client,
            uploads: UploadRegistry::default(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn client(&self) -> SharedClient {
        self.client.clone()
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn dispatch(&mut self, msg: Message) {
        tracing::debug!(?msg, "dispatch");
        update(&mut self.state, msg);
    }

    /// Folds everything spawned tasks have sent so far, in arrival order.
    /// Returns the number of envelopes handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(envelope) = self.inbox.try_recv() {
            self.apply(envelope);
            handled += 1;
        }
        handled
    }

    /// Waits for the next envelope and applies it.
    pub async fn process_next(&mut self) -> bool {
        match self.inbox.recv().await {
            Some(envelope) => {
                self.apply(envelope);
                true
            }
            None => false,
        }
    }

    /// Yields to spawned tasks and folds their output until the inbox stays
    /// quiet. Tasks that sleep are not waited for.
    #[cfg(test)]
    pub async fn settle(&mut self) {
        let mut quiet = 0;
        while quiet < 10 {
            tokio::task::yield_now().await;
            if self.process_pending() == 0 {
                quiet += 1;
            } else {
                quiet = 0;
            }
        }
    }

    fn apply(&mut self, envelope: Envelope) {
        match envelope {
            Envelope::Message(msg) => self.dispatch(msg),
            Envelope::Thunk(thunk) => thunk(self),
        }
    }
}
