//! Mailbox dispatcher over a tokio channel
//!
//! `submit` never blocks; payloads queue until the consumer drains them.
//!
//! ```ignore
//! let (dispatcher, mut rx) = ChannelDispatcher::new();
//!
//! tokio::spawn(async move {
//!     while let Some(payload) = rx.recv().await {
//!         store.dispatch(payload.action);
//!     }
//! });
//!
//! dashboard_actions::github_repos::fetch_next_page(&dispatcher, "repoListA")?;
//! ```

use tokio::sync::mpsc;

use crate::{Action, DispatchError, Dispatcher, Payload};

/// Dispatcher backed by an unbounded mpsc channel
#[derive(Debug)]
pub struct ChannelDispatcher<A: Action> {
    tx: mpsc::UnboundedSender<Payload<A>>,
}

impl<A: Action> Clone for ChannelDispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<A: Action> ChannelDispatcher<A> {
    /// Create a dispatcher and the receiver its payloads arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Payload<A>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Wrap an existing sender
    pub fn from_sender(tx: mpsc::UnboundedSender<Payload<A>>) -> Self {
        Self { tx }
    }

    /// Whether the receiving side has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<A: Action> Dispatcher<A> for ChannelDispatcher<A> {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        let action = payload.name();
        tracing::trace!(action = %action, source = %payload.source, "Queueing");
        self.tx.send(payload).map_err(|_| {
            tracing::warn!(action = %action, "Mailbox closed, action dropped");
            DispatchError::Closed { action }
        })
    }
}
