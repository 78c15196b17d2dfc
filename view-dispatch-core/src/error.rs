//! Dispatcher errors

use thiserror::Error;

use crate::listener::DispatchToken;

/// Failures reported by a [`Dispatcher`](crate::Dispatcher)
///
/// Action creators never produce these themselves; they hand back whatever
/// the dispatcher returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A deferred dispatcher was used before one was installed
    #[error("dispatcher has not been initialized")]
    Uninitialized,

    /// A deferred dispatcher was installed twice
    #[error("dispatcher is already initialized")]
    AlreadyInitialized,

    /// A listener tried to submit while a dispatch was running
    #[error("cannot dispatch `{action}` in the middle of a dispatch")]
    Reentrant { action: &'static str },

    /// Listeners were registered or removed while a dispatch was running
    #[error("cannot change listeners in the middle of a dispatch")]
    ListenersLocked,

    #[error("no listener registered for {0}")]
    UnknownToken(DispatchToken),

    /// The receiving half of a mailbox dispatcher is gone
    #[error("dispatcher mailbox is closed, dropped `{action}`")]
    Closed { action: &'static str },
}
