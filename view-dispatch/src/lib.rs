//! view-dispatch: Typed Flux-style action dispatch for dashboard views
//!
//! Views never touch store state directly. They call action creators, which
//! build one typed message per call and submit it to an injected
//! [`Dispatcher`].
//!
//! # Example
//! ```ignore
//! use view_dispatch::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(rename_all = "SCREAMING_SNAKE_CASE", category = "repo_list")]
//! enum RepoListAction {
//!     FetchNextPage { store_id: String },
//!     FetchPrevPage { store_id: String },
//! }
//!
//! let dispatcher = ListenerDispatcher::new();
//! dispatcher.register(|payload: &Payload<RepoListAction>| {
//!     println!("{} from {}", payload.name(), payload.source);
//! })?;
//! dispatcher.handle_view_action(RepoListAction::FetchNextPage {
//!     store_id: "repoListA".into(),
//! })?;
//! ```

// Re-export everything from core
pub use view_dispatch_core::*;

// Re-export derive macros
pub use view_dispatch_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use view_dispatch_core::{Action, ActionCategory, Dispatcher, Middleware};

    // Messages
    pub use view_dispatch_core::{ActionSource, DispatchError, Payload};

    // Dispatchers
    pub use view_dispatch_core::{
        ChannelDispatcher, DeferredDispatcher, DispatchToken, DispatcherWithMiddleware,
        ListenerDispatcher,
    };

    // Middleware
    pub use view_dispatch_core::{
        ActionLoggerConfig, ActionLoggerMiddleware, ComposedMiddleware, NoopMiddleware,
    };

    // Derive macros
    pub use view_dispatch_macros::Action;
}
