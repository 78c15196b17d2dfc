//! Core traits and types for view-dispatch
//!
//! This crate provides the foundational abstractions for wiring UI views to
//! stores through typed action messages, following a Flux-inspired
//! architecture.
//!
//! # Core Concepts
//!
//! - **Action**: A typed message naming an intent raised by a view
//! - **Payload**: An action tagged with its source (view or server)
//! - **Dispatcher**: The seam action creators submit payloads through
//! - **Middleware**: Observers wrapped around a dispatcher
//!
//! # Basic Example
//!
//! ```ignore
//! use view_dispatch_core::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(rename_all = "SCREAMING_SNAKE_CASE")]
//! enum ListAction {
//!     Refresh { store_id: String },
//! }
//!
//! // Action creators take the dispatcher as a dependency
//! fn refresh<D: Dispatcher<ListAction>>(dispatcher: &D, store_id: &str) -> Result<(), DispatchError> {
//!     dispatcher.handle_view_action(ListAction::Refresh { store_id: store_id.into() })
//! }
//!
//! let dispatcher = ListenerDispatcher::new();
//! dispatcher.register(|payload| println!("{}", payload.name()))?;
//! refresh(&dispatcher, "repoListA")?;
//! ```
//!
//! # Choosing a dispatcher
//!
//! - [`ListenerDispatcher`]: synchronous callback list for a single event loop
//! - [`ChannelDispatcher`]: tokio mailbox, drained by a consumer task
//! - [`DeferredDispatcher`]: process-wide slot filled in once at startup
//! - [`DispatcherWithMiddleware`]: any of the above plus middleware

pub mod action;
pub mod channel;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod listener;
pub mod middleware;
pub mod payload;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory};
pub use payload::{ActionSource, Payload};

// Dispatcher exports
pub use channel::ChannelDispatcher;
pub use dispatcher::{DeferredDispatcher, Dispatcher};
pub use error::DispatchError;
pub use listener::{DispatchToken, ListenerDispatcher};

// Middleware exports
pub use config::{glob_match, ActionLoggerConfig};
pub use middleware::{
    ActionLoggerMiddleware, ComposedMiddleware, DispatcherWithMiddleware, Middleware,
    NoopMiddleware,
};

// Testing exports
pub use testing::{FailingDispatcher, RecordingDispatcher};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory};
    pub use crate::channel::ChannelDispatcher;
    pub use crate::config::ActionLoggerConfig;
    pub use crate::dispatcher::{DeferredDispatcher, Dispatcher};
    pub use crate::error::DispatchError;
    pub use crate::listener::{DispatchToken, ListenerDispatcher};
    pub use crate::middleware::{
        ActionLoggerMiddleware, ComposedMiddleware, DispatcherWithMiddleware, Middleware,
        NoopMiddleware,
    };
    pub use crate::payload::{ActionSource, Payload};
}
