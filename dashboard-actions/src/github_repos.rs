//! Pagination actions for GitHub repository lists
//!
//! Every creator builds exactly one [`GithubReposAction`] and submits it as a
//! view action. Arguments are forwarded untouched and the dispatcher's result
//! is returned as-is.
//!
//! Wire form of each action:
//!
//! ```text
//! {"name":"FETCH_PREV_PAGE","storeId":"repoListA"}
//! {"name":"FETCH_NEXT_PAGE","storeId":"repoListA"}
//! {"name":"UNLOAD_PAGE_ID","storeId":"repoListA","pageId":3}
//! ```
//!
//! Older listeners used namespaced names, including the misspelled
//! `GITHUB_REPOS:UNLAOD_PAGE_ID`. Those are accepted when decoding; encoding
//! always produces the names above.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use view_dispatch::{Action, DispatchError, Dispatcher};

use crate::StoreId;

/// Actions addressed to a repository list store
#[derive(Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(rename_all = "SCREAMING_SNAKE_CASE", category = "github_repos")]
#[serde(tag = "name")]
pub enum GithubReposAction {
    /// Drop a cached page from the store
    #[serde(
        rename = "UNLOAD_PAGE_ID",
        alias = "GITHUB_REPOS:UNLOAD_PAGE_ID",
        alias = "GITHUB_REPOS:UNLAOD_PAGE_ID",
        rename_all = "camelCase"
    )]
    UnloadPageId {
        store_id: StoreId,
        /// Caller-defined page identifier; `null` when absent
        #[serde(default)]
        page_id: Value,
    },

    #[serde(
        rename = "FETCH_PREV_PAGE",
        alias = "GITHUB_REPOS:FETCH_PREV_PAGE",
        rename_all = "camelCase"
    )]
    FetchPrevPage { store_id: StoreId },

    #[serde(
        rename = "FETCH_NEXT_PAGE",
        alias = "GITHUB_REPOS:FETCH_NEXT_PAGE",
        rename_all = "camelCase"
    )]
    FetchNextPage { store_id: StoreId },
}

impl GithubReposAction {
    /// Store instance this action is addressed to
    pub fn store_id(&self) -> &StoreId {
        match self {
            GithubReposAction::UnloadPageId { store_id, .. }
            | GithubReposAction::FetchPrevPage { store_id }
            | GithubReposAction::FetchNextPage { store_id } => store_id,
        }
    }

    /// Page identifier, only carried by `UnloadPageId`
    pub fn page_id(&self) -> Option<&Value> {
        match self {
            GithubReposAction::UnloadPageId { page_id, .. } => Some(page_id),
            _ => None,
        }
    }
}

fn submit<D>(dispatcher: &D, action: GithubReposAction) -> Result<(), DispatchError>
where
    D: Dispatcher<GithubReposAction> + ?Sized,
{
    tracing::trace!(
        action = %action.name(),
        store_id = %action.store_id(),
        "GitHub repos view action"
    );
    dispatcher.handle_view_action(action)
}

/// Ask the store to forget a loaded page
pub fn unload_page_id<D>(
    dispatcher: &D,
    store_id: impl Into<StoreId>,
    page_id: impl Into<Value>,
) -> Result<(), DispatchError>
where
    D: Dispatcher<GithubReposAction> + ?Sized,
{
    submit(
        dispatcher,
        GithubReposAction::UnloadPageId {
            store_id: store_id.into(),
            page_id: page_id.into(),
        },
    )
}

/// Ask the store to load the page before the current one
pub fn fetch_prev_page<D>(dispatcher: &D, store_id: impl Into<StoreId>) -> Result<(), DispatchError>
where
    D: Dispatcher<GithubReposAction> + ?Sized,
{
    submit(
        dispatcher,
        GithubReposAction::FetchPrevPage {
            store_id: store_id.into(),
        },
    )
}

/// Ask the store to load the page after the current one
pub fn fetch_next_page<D>(dispatcher: &D, store_id: impl Into<StoreId>) -> Result<(), DispatchError>
where
    D: Dispatcher<GithubReposAction> + ?Sized,
{
    submit(
        dispatcher,
        GithubReposAction::FetchNextPage {
            store_id: store_id.into(),
        },
    )
}

/// The same action creators bound to one dispatcher
///
/// ```ignore
/// let actions = GithubRepos::new(Rc::clone(&dispatcher));
/// actions.fetch_next_page("repoListA")?;
/// ```
#[derive(Debug, Clone)]
pub struct GithubRepos<D> {
    dispatcher: D,
}

impl<D: Dispatcher<GithubReposAction>> GithubRepos<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn into_dispatcher(self) -> D {
        self.dispatcher
    }

    pub fn unload_page_id(
        &self,
        store_id: impl Into<StoreId>,
        page_id: impl Into<Value>,
    ) -> Result<(), DispatchError> {
        unload_page_id(&self.dispatcher, store_id, page_id)
    }

    pub fn fetch_prev_page(&self, store_id: impl Into<StoreId>) -> Result<(), DispatchError> {
        fetch_prev_page(&self.dispatcher, store_id)
    }

    pub fn fetch_next_page(&self, store_id: impl Into<StoreId>) -> Result<(), DispatchError> {
        fetch_next_page(&self.dispatcher, store_id)
    }
}
