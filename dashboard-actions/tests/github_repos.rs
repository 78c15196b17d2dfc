//! Action creator tests against recording, listener, and mailbox dispatchers

use std::cell::RefCell;
use std::rc::Rc;

use dashboard_actions::github_repos;
use dashboard_actions::{GithubRepos, GithubReposAction, StoreId};
use serde_json::{json, Value};
use view_dispatch::testing::{FailingDispatcher, RecordingDispatcher};
use view_dispatch::{
    assert_not_submitted, assert_submitted, count_submitted, ActionLoggerConfig,
    ActionLoggerMiddleware, ActionSource, ChannelDispatcher, DeferredDispatcher, DispatchError,
    Dispatcher, DispatcherWithMiddleware, ListenerDispatcher, Payload,
};

fn recorder() -> RecordingDispatcher<GithubReposAction> {
    RecordingDispatcher::new()
}

#[test]
fn test_fetch_prev_page_submits_one_message() {
    let mut recorder = recorder();

    github_repos::fetch_prev_page(&recorder, "repoListA").unwrap();

    let payloads = recorder.drain_submitted();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].source, ActionSource::View);
    assert_eq!(
        payloads[0].action,
        GithubReposAction::FetchPrevPage {
            store_id: "repoListA".into()
        }
    );
    assert_eq!(
        serde_json::to_value(&payloads[0].action).unwrap(),
        json!({ "name": "FETCH_PREV_PAGE", "storeId": "repoListA" })
    );
}

#[test]
fn test_fetch_next_page_submits_one_message() {
    let mut recorder = recorder();

    github_repos::fetch_next_page(&recorder, "repoListA").unwrap();

    let actions = recorder.drain_actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(
        serde_json::to_value(&actions[0]).unwrap(),
        json!({ "name": "FETCH_NEXT_PAGE", "storeId": "repoListA" })
    );
}

#[test]
fn test_unload_page_id_carries_page() {
    let mut recorder = recorder();

    github_repos::unload_page_id(&recorder, "repoListA", 3).unwrap();

    let actions = recorder.drain_actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(
        serde_json::to_value(&actions[0]).unwrap(),
        json!({ "name": "UNLOAD_PAGE_ID", "storeId": "repoListA", "pageId": 3 })
    );
}

#[test]
fn test_unload_page_id_forwards_any_page_value() {
    let mut recorder = recorder();

    github_repos::unload_page_id(&recorder, "a", "cursor-abc").unwrap();
    github_repos::unload_page_id(&recorder, "a", None::<u64>).unwrap();
    github_repos::unload_page_id(&recorder, "a", json!({ "page": 2 })).unwrap();

    let pages: Vec<Value> = recorder
        .drain_actions()
        .iter()
        .filter_map(|a| a.page_id().cloned())
        .collect();
    assert_eq!(pages, vec![json!("cursor-abc"), Value::Null, json!({ "page": 2 })]);
}

#[test]
fn test_repeated_calls_are_not_deduplicated() {
    let mut recorder = recorder();

    github_repos::fetch_next_page(&recorder, "repoListA").unwrap();
    github_repos::fetch_next_page(&recorder, "repoListA").unwrap();

    let actions = recorder.drain_actions();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], actions[1]);
}

#[test]
fn test_each_call_submits_exactly_once() {
    let mut recorder = recorder();

    github_repos::fetch_prev_page(&recorder, "a").unwrap();
    github_repos::unload_page_id(&recorder, "b", 1).unwrap();
    github_repos::fetch_next_page(&recorder, "c").unwrap();

    let actions = recorder.drain_actions();
    assert_eq!(actions.len(), 3);
    assert_eq!(count_submitted!(actions, GithubReposAction::FetchPrevPage { .. }), 1);
    assert_eq!(count_submitted!(actions, GithubReposAction::UnloadPageId { .. }), 1);
    assert_eq!(count_submitted!(actions, GithubReposAction::FetchNextPage { .. }), 1);
    assert_submitted!(actions, GithubReposAction::UnloadPageId { store_id, .. } if store_id == "b");
    assert_not_submitted!(actions, GithubReposAction::FetchNextPage { store_id } if store_id == "a");
}

#[test]
fn test_creators_submit_view_actions_only() {
    let mut recorder = recorder();

    github_repos::fetch_prev_page(&recorder, "a").unwrap();
    github_repos::unload_page_id(&recorder, "a", 4).unwrap();
    github_repos::fetch_next_page(&recorder, "a").unwrap();

    let payloads = recorder.drain_submitted();
    assert_eq!(count_submitted!(payloads, source: ActionSource::View, _), 3);
    assert_eq!(count_submitted!(payloads, source: ActionSource::Server, _), 0);
    assert_submitted!(
        payloads,
        source: ActionSource::View,
        GithubReposAction::UnloadPageId { page_id, .. } if *page_id == json!(4)
    );
    assert_not_submitted!(payloads, source: ActionSource::Server, GithubReposAction::FetchNextPage { .. });
}

#[test]
fn test_store_id_passes_through() {
    let mut recorder = recorder();
    let id = StoreId::new("repoListB");

    github_repos::fetch_next_page(&recorder, &id).unwrap();
    github_repos::fetch_prev_page(&recorder, id.to_string()).unwrap();

    for action in recorder.drain_actions() {
        assert_eq!(action.store_id(), &id);
    }
}

#[test]
fn test_bound_gateway() {
    let actions = GithubRepos::new(recorder());

    actions.fetch_prev_page("repoListA").unwrap();
    actions.unload_page_id("repoListA", 7).unwrap();
    actions.fetch_next_page("repoListA").unwrap();

    let mut recorder = actions.into_dispatcher();
    let names: Vec<_> = recorder
        .drain_actions()
        .iter()
        .map(view_dispatch::Action::name)
        .collect();
    assert_eq!(names, vec!["FETCH_PREV_PAGE", "UNLOAD_PAGE_ID", "FETCH_NEXT_PAGE"]);
}

#[test]
fn test_dyn_dispatcher() {
    let mut recorder = recorder();
    {
        let dispatcher: &dyn Dispatcher<GithubReposAction> = &recorder;
        github_repos::fetch_next_page(dispatcher, "repoListA").unwrap();
    }
    assert!(recorder.has_submitted());
}

#[test]
fn test_listener_dispatcher_delivers_to_stores() {
    let dispatcher = Rc::new(ListenerDispatcher::<GithubReposAction>::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    dispatcher
        .register(move |payload: &Payload<GithubReposAction>| {
            sink.borrow_mut().push(serde_json::to_value(payload).unwrap());
        })
        .unwrap();

    let actions = GithubRepos::new(Rc::clone(&dispatcher));
    actions.unload_page_id("repoListA", 3).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![json!({
            "source": "VIEW_ACTION",
            "action": { "name": "UNLOAD_PAGE_ID", "storeId": "repoListA", "pageId": 3 }
        })]
    );
}

#[test]
fn test_nested_dispatch_error_reaches_listener() {
    let dispatcher = Rc::new(ListenerDispatcher::<GithubReposAction>::new());
    let nested = Rc::new(RefCell::new(None));

    let inner = Rc::downgrade(&dispatcher);
    let result = Rc::clone(&nested);
    dispatcher
        .register(move |payload: &Payload<GithubReposAction>| {
            if let (GithubReposAction::FetchNextPage { store_id }, Some(d)) =
                (&payload.action, inner.upgrade())
            {
                // A store reacting to a page change by unloading a page
                *result.borrow_mut() = Some(github_repos::unload_page_id(&*d, store_id, 1));
            }
        })
        .unwrap();

    github_repos::fetch_next_page(&*dispatcher, "repoListA").unwrap();

    assert_eq!(
        nested.borrow_mut().take(),
        Some(Err(DispatchError::Reentrant {
            action: "UNLOAD_PAGE_ID"
        }))
    );
}

#[tokio::test]
async fn test_channel_dispatcher_mailbox() {
    let (dispatcher, mut rx) = ChannelDispatcher::<GithubReposAction>::new();
    let actions = GithubRepos::new(dispatcher);

    actions.fetch_next_page("repoListA").unwrap();
    actions.fetch_prev_page("repoListA").unwrap();
    drop(actions);

    let mut received = Vec::new();
    while let Some(payload) = rx.recv().await {
        received.push(payload.into_action());
    }
    assert_eq!(
        received,
        vec![
            GithubReposAction::FetchNextPage {
                store_id: "repoListA".into()
            },
            GithubReposAction::FetchPrevPage {
                store_id: "repoListA".into()
            },
        ]
    );
}

#[test]
fn test_closed_mailbox_error_is_returned() {
    let (dispatcher, rx) = ChannelDispatcher::<GithubReposAction>::new();
    drop(rx);

    assert_eq!(
        github_repos::fetch_prev_page(&dispatcher, "repoListA"),
        Err(DispatchError::Closed {
            action: "FETCH_PREV_PAGE"
        })
    );
}

#[test]
fn test_uninitialized_dispatcher_error_is_returned() {
    let deferred = DeferredDispatcher::<RecordingDispatcher<GithubReposAction>>::new();

    assert_eq!(
        github_repos::fetch_next_page(&deferred, "repoListA"),
        Err(DispatchError::Uninitialized)
    );

    deferred.install(recorder()).unwrap();
    assert!(github_repos::fetch_next_page(&deferred, "repoListA").is_ok());
}

#[test]
fn test_dispatcher_errors_are_not_transformed() {
    let failing = FailingDispatcher::new(DispatchError::ListenersLocked);

    assert_eq!(
        github_repos::unload_page_id(&failing, "a", 1),
        Err(DispatchError::ListenersLocked)
    );
    assert_eq!(
        github_repos::fetch_prev_page(&failing, "a"),
        Err(DispatchError::ListenersLocked)
    );
}

#[test]
fn test_logging_middleware_is_transparent() {
    let dispatcher = DispatcherWithMiddleware::new(
        recorder(),
        ActionLoggerMiddleware::new(ActionLoggerConfig::new(Some("FETCH_*"), None)),
    );

    github_repos::fetch_next_page(&dispatcher, "repoListA").unwrap();
    github_repos::unload_page_id(&dispatcher, "repoListA", 2).unwrap();

    let (mut recorder, _) = dispatcher.into_parts();
    assert_eq!(recorder.drain_actions().len(), 2);
}
