//! Synchronous listener-list dispatcher
//!
//! Built for a single UI event loop: `submit` runs every registered listener
//! in registration order before it returns. A listener may not submit another
//! action while the dispatch is in progress.

use std::cell::{Cell, RefCell};
use std::fmt;

use crate::{Action, DispatchError, Dispatcher, Payload};

/// Handle returned by [`ListenerDispatcher::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispatchToken(u64);

impl DispatchToken {
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DispatchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID_{}", self.0)
    }
}

type Listener<A> = Box<dyn FnMut(&Payload<A>)>;

/// Dispatcher that fans each payload out to a list of callbacks
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use view_dispatch_core::{Action, Dispatcher, ListenerDispatcher};
///
/// #[derive(Clone, Debug)]
/// struct Refresh;
///
/// impl Action for Refresh {
///     fn name(&self) -> &'static str {
///         "REFRESH"
///     }
/// }
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let dispatcher = ListenerDispatcher::<Refresh>::new();
/// let sink = Rc::clone(&seen);
/// dispatcher
///     .register(move |payload| sink.borrow_mut().push(payload.name()))
///     .unwrap();
///
/// dispatcher.handle_view_action(Refresh).unwrap();
/// assert_eq!(*seen.borrow(), vec!["REFRESH"]);
/// ```
pub struct ListenerDispatcher<A: Action> {
    listeners: RefCell<Vec<(DispatchToken, Listener<A>)>>,
    len: Cell<usize>,
    next_id: Cell<u64>,
    dispatching: Cell<bool>,
}

impl<A: Action> fmt::Debug for ListenerDispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerDispatcher")
            .field("listeners_count", &self.listener_count())
            .field("dispatching", &self.dispatching.get())
            .finish()
    }
}

impl<A: Action> Default for ListenerDispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ListenerDispatcher<A> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            len: Cell::new(0),
            next_id: Cell::new(1),
            dispatching: Cell::new(false),
        }
    }

    /// Add a listener; it receives every payload submitted from now on
    pub fn register<F>(&self, listener: F) -> Result<DispatchToken, DispatchError>
    where
        F: FnMut(&Payload<A>) + 'static,
    {
        if self.dispatching.get() {
            return Err(DispatchError::ListenersLocked);
        }

        let token = DispatchToken(self.next_id.get());
        self.next_id.set(token.0 + 1);
        self.listeners.borrow_mut().push((token, Box::new(listener)));
        self.len.set(self.len.get() + 1);
        tracing::debug!(token = %token, "Listener registered");
        Ok(token)
    }

    /// Remove a previously registered listener
    pub fn unregister(&self, token: DispatchToken) -> Result<(), DispatchError> {
        if self.dispatching.get() {
            return Err(DispatchError::ListenersLocked);
        }

        let mut listeners = self.listeners.borrow_mut();
        let index = listeners
            .iter()
            .position(|(t, _)| *t == token)
            .ok_or(DispatchError::UnknownToken(token))?;
        drop(listeners.remove(index));
        self.len.set(listeners.len());
        tracing::debug!(token = %token, "Listener unregistered");
        Ok(())
    }

    /// Whether a dispatch is currently running
    pub fn is_dispatching(&self) -> bool {
        self.dispatching.get()
    }

    /// Number of registered listeners, also valid while dispatching
    pub fn listener_count(&self) -> usize {
        self.len.get()
    }
}

/// Clears the dispatching flag even if a listener panics
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<A: Action> Dispatcher<A> for ListenerDispatcher<A> {
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        if self.dispatching.get() {
            tracing::warn!(action = %payload.name(), "Rejected nested dispatch");
            return Err(DispatchError::Reentrant {
                action: payload.name(),
            });
        }

        self.dispatching.set(true);
        let _guard = DispatchGuard(&self.dispatching);

        let mut listeners = self.listeners.borrow_mut();
        tracing::trace!(
            action = %payload.name(),
            source = %payload.source,
            listeners = listeners.len(),
            "Dispatching"
        );
        for (_, listener) in listeners.iter_mut() {
            listener(&payload);
        }
        Ok(())
    }
}
