mod common;

use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use common::TestApp;
use http_body_util::BodyExt;
use serde_json::json;
use serde_json::Value;
use tower::ServiceExt;

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_room(body: Value, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/v1/rooms")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_create_room_returns_created() {
    let app = TestApp::new();
    let token = app.access_token(1, "ann");

    let (status, body) = send(
        app.router(),
        post_room(json!({ "participant_id": 3 }), Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["initiator_id"], 1);
    assert_eq!(body["data"]["participant_id"], 3);
    assert!(body["data"]["id"].as_str().is_some());
}

#[tokio::test]
async fn test_create_room_without_token_is_unauthorized() {
    let app = TestApp::new();

    let (status, body) = send(app.router(), post_room(json!({ "participant_id": 3 }), None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["data"]["message"], "missing metadata");
}

#[tokio::test]
async fn test_create_room_with_invalid_participant() {
    let app = TestApp::new();
    let token = app.access_token(1, "ann");

    let (status, _) = send(
        app.router(),
        post_room(json!({ "participant_id": -1 }), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        app.router(),
        post_room(json!({ "participant_id": 99 }), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["message"], "participant not found");
}
