//! Test utilities for view-dispatch applications
//!
//! - [`RecordingDispatcher`]: dispatcher double that records every payload
//! - [`FailingDispatcher`]: dispatcher double that always fails
//! - Assertion macros for verifying submitted actions
//!
//! # Example
//!
//! ```ignore
//! use view_dispatch::testing::RecordingDispatcher;
//! use view_dispatch::assert_submitted;
//!
//! let mut recorder = RecordingDispatcher::<Action>::new();
//! my_actions::refresh(&recorder)?;
//!
//! let actions = recorder.drain_actions();
//! assert_submitted!(actions, Action::Refresh { .. });
//! ```

use tokio::sync::mpsc;

use crate::{Action, DispatchError, Dispatcher, Payload};

/// Dispatcher double that keeps every submitted payload
///
/// Payloads go through an unbounded channel, so the recorder can be shared by
/// reference (or moved into another task through [`sender`](Self::sender))
/// while the test drains it afterwards.
#[derive(Debug)]
pub struct RecordingDispatcher<A: Action> {
    tx: mpsc::UnboundedSender<Payload<A>>,
    rx: mpsc::UnboundedReceiver<Payload<A>>,
}

impl<A: Action> Default for RecordingDispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> RecordingDispatcher<A> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// A mailbox dispatcher that records into this recorder
    pub fn sender(&self) -> crate::ChannelDispatcher<A> {
        crate::ChannelDispatcher::from_sender(self.tx.clone())
    }

    /// Drain all submitted payloads
    pub fn drain_submitted(&mut self) -> Vec<Payload<A>> {
        let mut payloads = Vec::new();
        while let Ok(payload) = self.rx.try_recv() {
            payloads.push(payload);
        }
        payloads
    }

    /// Drain all submitted payloads, keeping only the actions
    pub fn drain_actions(&mut self) -> Vec<A> {
        self.drain_submitted()
            .into_iter()
            .map(Payload::into_action)
            .collect()
    }

    /// Check if anything was submitted (drains the recorder)
    pub fn has_submitted(&mut self) -> bool {
        !self.drain_submitted().is_empty()
    }
}

impl<A: Action> Dispatcher<A> for RecordingDispatcher<A> {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        // The receiver lives in `self`, so this cannot fail
        let _ = self.tx.send(payload);
        Ok(())
    }
}

/// Dispatcher double that rejects every payload with the same error
#[derive(Debug, Clone)]
pub struct FailingDispatcher {
    error: DispatchError,
}

impl FailingDispatcher {
    pub fn new(error: DispatchError) -> Self {
        Self { error }
    }
}

impl<A: Action> Dispatcher<A> for FailingDispatcher {
    fn submit(&self, _payload: Payload<A>) -> Result<(), DispatchError> {
        Err(self.error.clone())
    }
}

// Every macro takes either a slice of actions or a slice of payloads plus a
// `source: <ActionSource>` filter. The `source:` arm must stay first.

/// Assert that an action matching a pattern was submitted.
///
/// # Example
///
/// ```ignore
/// let actions = recorder.drain_actions();
/// assert_submitted!(actions, Action::FetchNextPage { .. });
///
/// let payloads = recorder.drain_submitted();
/// assert_submitted!(payloads, source: ActionSource::View, Action::FetchNextPage { .. });
/// ```
#[macro_export]
macro_rules! assert_submitted {
    ($payloads:expr, source: $source:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $payloads
                .iter()
                .any(|p| p.source == $source && matches!(&p.action, $pattern $(if $guard)?)),
            "no {:?} payload matching `{}` among {:?}",
            $source,
            stringify!($pattern),
            $payloads
        );
    };
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "no action matching `{}` among {:?}",
            stringify!($pattern),
            $actions
                .iter()
                .map(|a| $crate::Action::name(a))
                .collect::<::std::vec::Vec<_>>()
        );
    };
}

/// Assert that no action matching a pattern was submitted.
#[macro_export]
macro_rules! assert_not_submitted {
    ($payloads:expr, source: $source:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$payloads
                .iter()
                .any(|p| p.source == $source && matches!(&p.action, $pattern $(if $guard)?)),
            "unexpected {:?} payload matching `{}` among {:?}",
            $source,
            stringify!($pattern),
            $payloads
        );
    };
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "unexpected action matching `{}` among {:?}",
            stringify!($pattern),
            $actions
                .iter()
                .map(|a| $crate::Action::name(a))
                .collect::<::std::vec::Vec<_>>()
        );
    };
}

/// First submitted action matching a pattern, as `Option<&A>`.
#[macro_export]
macro_rules! find_submitted {
    ($payloads:expr, source: $source:expr, $pattern:pat $(if $guard:expr)?) => {
        $payloads
            .iter()
            .filter(|p| p.source == $source)
            .map(|p| &p.action)
            .find(|a| matches!(*a, $pattern $(if $guard)?))
    };
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(*a, $pattern $(if $guard)?))
    };
}

/// Number of submitted actions matching a pattern.
///
/// # Example
///
/// ```ignore
/// let actions = recorder.drain_actions();
/// assert_eq!(count_submitted!(actions, Action::FetchNextPage { .. }), 1);
/// ```
#[macro_export]
macro_rules! count_submitted {
    ($payloads:expr, source: $source:expr, $pattern:pat $(if $guard:expr)?) => {
        $payloads
            .iter()
            .filter(|p| p.source == $source && matches!(&p.action, $pattern $(if $guard)?))
            .count()
    };
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions
            .iter()
            .filter(|a| matches!(*a, $pattern $(if $guard)?))
            .count()
    };
}
