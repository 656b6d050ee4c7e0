use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_room::create_room;
use crate::proto::chat::chat_service_server::ChatService;

/// Gateway state: the gRPC service instance the tonic server hosts.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatService>,
}

pub fn create_router(chat: Arc<dyn ChatService>) -> Router {
    let state = AppState { chat };

    let room_routes = Router::new().route("/v1/rooms", post(create_room));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(room_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
