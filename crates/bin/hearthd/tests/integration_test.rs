//! End-to-end smoke tests for the full hearthd stack.
//!
//! Each test builds the complete application (fresh in-memory store, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hearth_adapter_http_axum::router;
use hearth_adapter_http_axum::state::AppState;
use hearth_app::services::hierarchy_service::HierarchyService;
use hearth_domain::hierarchy::HierarchyStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router, returning the service for direct inspection.
fn app() -> (axum::Router, Arc<HierarchyService>) {
    let service = Arc::new(HierarchyService::new(HierarchyStore::new()));
    let router = router::build(AppState::from_arc(Arc::clone(&service)));
    (router, service)
}

async fn call(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &axum::Router, uri: &str, body: Value) -> Value {
    let (status, value) = call(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri} failed: {value}");
    value
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// CRUD per resource
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_user_crud_cycle() {
    let (app, _) = app();

    let user = create(
        &app,
        "/users",
        json!({"name": "John Doe", "email": "john.doe@example.com"}),
    )
    .await;
    assert_eq!(user["name"], "John Doe");
    assert_eq!(user["email"], "john.doe@example.com");
    let id = user["id"].as_u64().unwrap();

    let (status, fetched) = call(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, user);

    let (status, updated) = call(
        &app,
        "PATCH",
        &format!("/users/{id}"),
        Some(json!({"name": "John Updated", "email": "john.updated@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "John Updated");
    assert_eq!(updated["email"], "john.updated@example.com");

    let (status, _) = call(&app, "DELETE", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, "GET", &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_complete_house_crud_cycle() {
    let (app, _) = app();
    let user = create(
        &app,
        "/users",
        json!({"name": "User 1", "email": "user1@example.com"}),
    )
    .await;

    let house = create(
        &app,
        "/houses",
        json!({"name": "House 1", "address": "123 Main St", "user_id": user["id"]}),
    )
    .await;
    assert_eq!(house["name"], "House 1");
    assert_eq!(house["rooms"], json!([]));

    let (status, updated) = call(
        &app,
        "PATCH",
        "/houses/1",
        Some(json!({"name": "House 1 Updated", "address": "1234 Main St", "user_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "House 1 Updated");

    let (status, _) = call(&app, "DELETE", "/houses/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, owner) = call(&app, "GET", "/users/1", None).await;
    assert_eq!(owner["houses"], json!([]));
}

#[tokio::test]
async fn should_complete_room_and_device_crud_cycle() {
    let (app, _) = app();
    create(
        &app,
        "/users",
        json!({"name": "User 1", "email": "user1@example.com"}),
    )
    .await;
    create(
        &app,
        "/houses",
        json!({"name": "House 1", "address": "123 Main St", "user_id": 1}),
    )
    .await;

    let room = create(
        &app,
        "/rooms",
        json!({"name": "Living Room", "house_id": 1}),
    )
    .await;
    assert_eq!(room["name"], "Living Room");

    let (status, renamed) = call(
        &app,
        "PATCH",
        "/rooms/1",
        Some(json!({"name": "Living Room Updated", "house_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Living Room Updated");

    let device = create(
        &app,
        "/devices",
        json!({"name": "Temperature Sensor", "type": "temperature", "room_id": 1, "value": 25}),
    )
    .await;
    assert_eq!(device["name"], "Temperature Sensor");

    let (status, fetched) = call(&app, "GET", "/devices/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, device);

    let (status, _) = call(&app, "DELETE", "/devices/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, room) = call(&app, "GET", "/rooms/1", None).await;
    assert_eq!(room["devices"], json!([]));

    let (status, _) = call(&app, "DELETE", "/rooms/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, house) = call(&app, "GET", "/houses/1", None).await;
    assert_eq!(house["rooms"], json!([]));
}

// ---------------------------------------------------------------------------
// Cascades and rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_cascade_whole_tree_on_user_delete() {
    let (app, service) = app();

    let user = create(&app, "/users", json!({"name": "A", "email": "a@x.com"})).await;
    assert_eq!(user["id"], 1);
    let house = create(
        &app,
        "/houses",
        json!({"name": "H", "address": "addr", "user_id": 1}),
    )
    .await;
    assert_eq!(house["id"], 1);
    let (_, user) = call(&app, "GET", "/users/1", None).await;
    assert_eq!(user["houses"], json!([1]));

    let room = create(&app, "/rooms", json!({"name": "R", "house_id": 1})).await;
    assert_eq!(room["id"], 1);
    let (_, house) = call(&app, "GET", "/houses/1", None).await;
    assert_eq!(house["rooms"], json!([1]));

    let device = create(
        &app,
        "/devices",
        json!({"name": "D", "type": "temperature", "room_id": 1, "value": 25}),
    )
    .await;
    assert_eq!(device["id"], 1);

    let (status, body) = call(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    for path in ["/users", "/houses", "/rooms", "/devices"] {
        let (_, list) = call(&app, "GET", path, None).await;
        assert_eq!(list, json!([]), "{path} should be empty");
    }
    assert!(service.list_devices().await.is_empty());
}

#[tokio::test]
async fn should_update_device_value_and_keep_other_fields() {
    let (app, _) = app();
    create(&app, "/users", json!({"name": "A", "email": "a@x.com"})).await;
    create(
        &app,
        "/houses",
        json!({"name": "H", "address": "addr", "user_id": 1}),
    )
    .await;
    create(&app, "/rooms", json!({"name": "R", "house_id": 1})).await;
    let device = create(
        &app,
        "/devices",
        json!({"name": "D", "type": "temperature", "room_id": 1, "value": 25}),
    )
    .await;

    let (status, updated) = call(
        &app,
        "PATCH",
        "/devices/1",
        Some(json!({
            "name": device["name"],
            "type": device["type"],
            "room_id": device["room_id"],
            "value": 30
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["value"], 30);
    assert_eq!(updated["name"], "D");
    assert_eq!(updated["type"], "temperature");
    assert_eq!(updated["room_id"], 1);
}

#[tokio::test]
async fn should_reject_house_for_missing_user() {
    let (app, service) = app();

    let (status, _) = call(
        &app,
        "POST",
        "/houses",
        Some(json!({"name": "H", "address": "addr", "user_id": 999})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(service.list_houses().await.is_empty());
}

#[tokio::test]
async fn should_reject_room_for_missing_house() {
    let (app, _) = app();

    let (status, body) = call(
        &app,
        "POST",
        "/rooms",
        Some(json!({"name": "R", "house_id": 9999})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "House 9999 does not exist");
}

#[tokio::test]
async fn should_reject_unknown_device_type() {
    let (app, service) = app();
    create(&app, "/users", json!({"name": "A", "email": "a@x.com"})).await;
    create(
        &app,
        "/houses",
        json!({"name": "H", "address": "addr", "user_id": 1}),
    )
    .await;
    create(&app, "/rooms", json!({"name": "R", "house_id": 1})).await;

    let (status, body) = call(
        &app,
        "POST",
        "/devices",
        Some(json!({"name": "V", "type": "voltage", "room_id": 1, "value": 230})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "invalid device type: voltage");
    assert!(service.list_devices().await.is_empty());
    let (_, room) = call(&app, "GET", "/rooms/1", None).await;
    assert_eq!(room["devices"], json!([]));
}

#[tokio::test]
async fn should_reject_malformed_request_bodies() {
    let (app, _) = app();

    let (status, _) = call(&app, "POST", "/users", Some(json!({"name": "No Email"}))).await;
    assert!(status.is_client_error());

    let (status, _) = call(&app, "GET", "/users/not-a-number", None).await;
    assert!(status.is_client_error());
}
