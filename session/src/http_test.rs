use std::sync::{Arc, Mutex};

use serde_json::json;

use super::*;
use crate::clock::FixedClock;
use crate::role::Role;
use crate::routes::Route;
use crate::storage::{MemoryStorage, TOKEN_KEY, USER_KEY};
use crate::store::SessionEvent;
use crate::test_support::{NOW, ScriptedTransport, identity, token_expiring_in};

struct Fixture {
    store: SessionStore,
    storage: Arc<MemoryStorage>,
    transport: ScriptedTransport,
    clock: Arc<FixedClock>,
}

fn signed_in(token_offset_secs: i64) -> Fixture {
    let user = serde_json::to_string(&identity(Role::Member)).unwrap();
    let storage = Arc::new(MemoryStorage::with_items([
        (TOKEN_KEY.to_owned(), token_expiring_in(token_offset_secs)),
        (USER_KEY.to_owned(), user),
    ]));
    let transport = ScriptedTransport::default();
    let clock = Arc::new(FixedClock::new(NOW));
    let store = SessionStore::new(storage.clone(), Arc::new(transport.clone()), clock.clone());
    store.restore();
    Fixture { store, storage, transport, clock }
}

#[tokio::test]
async fn attaches_bearer_token_when_signed_in() {
    let fx = signed_in(600);
    fx.transport.push_json(200, json!({ "ok": true }));

    let response = fx.store.api().request(Method::Get, "/users/me", None).await.unwrap();

    assert_eq!(response.status, 200);
    let sent = fx.transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].path, "/users/me");
    assert_eq!(sent[0].authorization(), Some(format!("Bearer {}", token_expiring_in(600))));
}

#[tokio::test]
async fn sends_anonymous_request_without_session() {
    let storage = Arc::new(MemoryStorage::new());
    let transport = ScriptedTransport::default();
    let store = SessionStore::new(storage, Arc::new(transport.clone()), Arc::new(FixedClock::new(NOW)));
    store.restore();
    transport.push_json(200, json!([]));

    store.api().request(Method::Get, "/programs", None).await.unwrap();

    assert_eq!(transport.requests()[0].bearer, None);
}

#[tokio::test]
async fn expired_token_forces_logout_without_dispatch() {
    let fx = signed_in(60);
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    fx.store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    fx.clock.advance(61.0);
    let result = fx.store.api().request(Method::Get, "/resources", None).await;

    assert!(matches!(result, Err(ApiError::Expired)));
    assert!(fx.transport.requests().is_empty());
    assert!(fx.store.token().is_none());
    assert!(fx.storage.is_empty());
    assert!(events.lock().unwrap().contains(&SessionEvent::Navigate(Route::Login)));
}

#[tokio::test]
async fn request_json_decodes_success_body() {
    let fx = signed_in(600);
    fx.transport.push_json(200, json!({ "stats": { "total_ventures": 2 } }));

    let body: serde_json::Value = fx.store.api().get("/dashboard/member").await.unwrap();

    assert_eq!(body["stats"]["total_ventures"], 2);
}

#[tokio::test]
async fn request_json_maps_error_status_with_detail() {
    let fx = signed_in(600);
    fx.transport.push_json(403, json!({ "detail": "Member access only" }));

    let result: Result<serde_json::Value, _> = fx.store.api().get("/dashboard/mentor").await;

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Member access only");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn request_json_reports_status_code_without_detail() {
    let fx = signed_in(600);
    fx.transport.push_json(500, serde_json::Value::Null);

    let result: Result<serde_json::Value, _> = fx.store.api().get("/admin/users").await;

    assert!(matches!(result, Err(ApiError::Status { status: 500, ref message }) if message == "HTTP 500"));
}

#[tokio::test]
async fn post_sends_body_and_decodes_response() {
    let fx = signed_in(600);
    fx.transport.push_json(201, json!({ "id": 9 }));

    #[derive(serde::Deserialize)]
    struct Created {
        id: i64,
    }
    let created: Created = fx.store.api().post("/resources/", json!({ "title": "Deck" })).await.unwrap();

    assert_eq!(created.id, 9);
    let sent = fx.transport.requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(json!({ "title": "Deck" })));
}

#[tokio::test]
async fn transport_failure_is_reported() {
    let fx = signed_in(600);
    fx.transport.push(Err(crate::error::TransportError::Request("offline".to_owned())));

    let result = fx.store.api().request(Method::Get, "/programs", None).await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
    assert!(fx.store.token().is_some());
}
