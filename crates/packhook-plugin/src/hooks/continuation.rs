//! Continuations handed to hook handlers.
//!
//! A [`Continuation`] is consumed by [`Continuation::done`], so a handler can
//! signal completion at most once. Dropping it without calling `done` is
//! visible to the dispatcher as a closed channel.

use tokio::sync::oneshot;

enum Signal {
    Channel(oneshot::Sender<()>),
    Callback(Box<dyn FnOnce() + Send>),
}

/// Zero-argument completion callback for a single hook invocation.
pub struct Continuation {
    plugin_id: String,
    signal: Option<Signal>,
}

impl Continuation {
    /// Creates a continuation paired with the receiver the host awaits.
    pub fn channel(plugin_id: &str) -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        let continuation = Self {
            plugin_id: plugin_id.to_string(),
            signal: Some(Signal::Channel(tx)),
        };
        (continuation, rx)
    }

    /// Creates a continuation that runs `callback` when completed.
    ///
    /// Useful for hosts that do not go through the dispatcher.
    pub fn from_fn<F>(plugin_id: &str, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            plugin_id: plugin_id.to_string(),
            signal: Some(Signal::Callback(Box::new(callback))),
        }
    }

    /// Plugin the continuation was issued to.
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Signals that the hook body has finished.
    pub fn done(mut self) {
        match self.signal.take() {
            // The host may have stopped waiting (timeout); nothing to report.
            Some(Signal::Channel(tx)) => {
                let _ = tx.send(());
            }
            Some(Signal::Callback(callback)) => callback(),
            None => {}
        }
    }
}

impl std::fmt::Debug for Continuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Continuation")
            .field("plugin_id", &self.plugin_id)
            .field("pending", &self.signal.is_some())
            .finish()
    }
}
