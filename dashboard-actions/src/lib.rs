//! View actions for the repository dashboard
//!
//! Each namespace module exposes action creators that build one typed
//! message per call and submit it to an injected
//! [`Dispatcher`](view_dispatch::Dispatcher) as a view action.
//!
//! ```ignore
//! use dashboard_actions::github_repos;
//! use view_dispatch::ListenerDispatcher;
//!
//! let dispatcher = ListenerDispatcher::new();
//! github_repos::fetch_next_page(&dispatcher, "repoListA")?;
//! github_repos::unload_page_id(&dispatcher, "repoListA", 3)?;
//! ```

pub mod github_repos;
mod store_id;

pub use github_repos::{GithubRepos, GithubReposAction};
pub use store_id::StoreId;
