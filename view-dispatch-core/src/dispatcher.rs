//! The dispatcher seam between action creators and stores
//!
//! Action creators take a [`Dispatcher`] as an explicit dependency instead of
//! reaching for a global. Applications that want one process-wide instance
//! can still park it in a `static` [`DeferredDispatcher`]:
//!
//! ```ignore
//! use view_dispatch_core::{ChannelDispatcher, DeferredDispatcher};
//!
//! static DISPATCHER: DeferredDispatcher<ChannelDispatcher<MyAction>> =
//!     DeferredDispatcher::new();
//!
//! let (dispatcher, rx) = ChannelDispatcher::new();
//! DISPATCHER.install(dispatcher)?;
//! my_actions::refresh(&DISPATCHER)?;
//! ```

use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use crate::{Action, DispatchError, Payload};

/// Routes submitted actions to whatever consumes them
///
/// `submit` is the only required method. `handle_view_action` and
/// `handle_server_action` tag the action with its source first.
pub trait Dispatcher<A: Action> {
    /// Deliver a payload
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError>;

    /// Deliver an action raised by a view
    fn handle_view_action(&self, action: A) -> Result<(), DispatchError> {
        self.submit(Payload::view(action))
    }

    /// Deliver an action raised by the server side
    fn handle_server_action(&self, action: A) -> Result<(), DispatchError> {
        self.submit(Payload::server(action))
    }
}

impl<A: Action, D: Dispatcher<A> + ?Sized> Dispatcher<A> for &D {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        (**self).submit(payload)
    }
}

impl<A: Action, D: Dispatcher<A> + ?Sized> Dispatcher<A> for Box<D> {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        (**self).submit(payload)
    }
}

impl<A: Action, D: Dispatcher<A> + ?Sized> Dispatcher<A> for Rc<D> {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        (**self).submit(payload)
    }
}

impl<A: Action, D: Dispatcher<A> + ?Sized> Dispatcher<A> for Arc<D> {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        (**self).submit(payload)
    }
}

/// A dispatcher that is installed after construction
///
/// Submissions before [`install`](Self::install) fail with
/// [`DispatchError::Uninitialized`].
#[derive(Debug)]
pub struct DeferredDispatcher<D> {
    inner: OnceLock<D>,
}

impl<D> Default for DeferredDispatcher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> DeferredDispatcher<D> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Install the dispatcher; only the first call succeeds
    pub fn install(&self, dispatcher: D) -> Result<(), DispatchError> {
        self.inner
            .set(dispatcher)
            .map_err(|_| DispatchError::AlreadyInitialized)
    }

    /// Get the installed dispatcher
    pub fn get(&self) -> Option<&D> {
        self.inner.get()
    }

    pub fn is_installed(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl<A: Action, D: Dispatcher<A>> Dispatcher<A> for DeferredDispatcher<D> {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        match self.inner.get() {
            Some(dispatcher) => dispatcher.submit(payload),
            None => {
                tracing::warn!(
                    action = %payload.name(),
                    source = %payload.source,
                    "Dispatcher used before initialization"
                );
                Err(DispatchError::Uninitialized)
            }
        }
    }
}
