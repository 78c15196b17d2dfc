//! Middleware around dispatcher submissions

use std::fmt;

use crate::{Action, ActionLoggerConfig, DispatchError, Dispatcher, Payload};

/// Middleware trait for intercepting submissions
///
/// Implement this trait to add logging, auditing, or other
/// cross-cutting concerns to a dispatcher.
pub trait Middleware<A: Action> {
    /// Called before the payload is handed to the dispatcher
    fn before(&self, payload: &Payload<A>);

    /// Called after the dispatcher returned
    fn after(&self, payload: &Payload<A>, result: &Result<(), DispatchError>);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&self, _payload: &Payload<A>) {}
    fn after(&self, _payload: &Payload<A>, _result: &Result<(), DispatchError>) {}
}

/// Middleware that logs submissions through `tracing`
///
/// Successful submissions are logged at debug level when they pass the
/// config filter. Failures are always logged.
#[derive(Debug, Clone, Default)]
pub struct ActionLoggerMiddleware {
    config: ActionLoggerConfig,
}

impl ActionLoggerMiddleware {
    pub fn new(config: ActionLoggerConfig) -> Self {
        Self { config }
    }

    /// Configure from `VIEW_DISPATCH_LOG_INCLUDE` / `VIEW_DISPATCH_LOG_EXCLUDE`
    pub fn from_env() -> Self {
        Self::new(ActionLoggerConfig::from_env())
    }

    pub fn config(&self) -> &ActionLoggerConfig {
        &self.config
    }
}

impl<A: Action> Middleware<A> for ActionLoggerMiddleware {
    fn before(&self, payload: &Payload<A>) {
        if self.config.should_log(payload.name()) {
            tracing::debug!(
                action = %payload.name(),
                source = %payload.source,
                summary = %payload.action.summary(),
                "Submitting action"
            );
        }
    }

    fn after(&self, payload: &Payload<A>, result: &Result<(), DispatchError>) {
        match result {
            Ok(()) => {
                if self.config.should_log(payload.name()) {
                    tracing::debug!(action = %payload.name(), "Action submitted");
                }
            }
            Err(error) => {
                tracing::warn!(action = %payload.name(), %error, "Action submission failed");
            }
        }
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&self, payload: &Payload<A>) {
        for middleware in &self.middlewares {
            middleware.before(payload);
        }
    }

    fn after(&self, payload: &Payload<A>, result: &Result<(), DispatchError>) {
        // Reverse order for proper nesting
        for middleware in self.middlewares.iter().rev() {
            middleware.after(payload, result);
        }
    }
}

/// Dispatcher with middleware support
///
/// Wraps a dispatcher and lets middleware observe each payload before and
/// after submission. The wrapped dispatcher's result is returned unchanged.
#[derive(Debug)]
pub struct DispatcherWithMiddleware<D, M> {
    dispatcher: D,
    middleware: M,
}

impl<D, M> DispatcherWithMiddleware<D, M> {
    pub fn new(dispatcher: D, middleware: M) -> Self {
        Self {
            dispatcher,
            middleware,
        }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Split back into the dispatcher and its middleware
    pub fn into_parts(self) -> (D, M) {
        (self.dispatcher, self.middleware)
    }
}

impl<A, D, M> Dispatcher<A> for DispatcherWithMiddleware<D, M>
where
    A: Action,
    D: Dispatcher<A>,
    M: Middleware<A>,
{
    fn submit(&self, payload: Payload<A>) -> Result<(), DispatchError> {
        self.middleware.before(&payload);
        let result = self.dispatcher.submit(payload.clone());
        self.middleware.after(&payload, &result);
        result
    }
}
