use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_user::get_user_by_id;
use super::handlers::get_user::get_user_by_nickname;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::refresh_token::refresh_token;
use super::handlers::register::register;
use crate::proto::user::internal_user_service_server::InternalUserService;
use crate::proto::user::user_service_server::UserService;
use crate::proto::user_auth::auth_service_server::AuthService;

/// Gateway state: the same gRPC service instances the tonic server hosts,
/// so every HTTP call runs through the request pipeline.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub internal_users: Arc<dyn InternalUserService>,
}

pub fn create_router(
    auth: Arc<dyn AuthService>,
    users: Arc<dyn UserService>,
    internal_users: Arc<dyn InternalUserService>,
) -> Router {
    let state = AppState {
        auth,
        users,
        internal_users,
    };

    let auth_routes = Router::new()
        .route("/v1/auth/register", post(register))
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/logout", post(logout))
        .route("/v1/auth/refresh", post(refresh_token));

    let user_routes = Router::new()
        .route("/v1/users/:nickname", get(get_user_by_nickname))
        .route("/v1/internal/users/:user_id", get(get_user_by_id));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
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
        .merge(auth_routes)
        .merge(user_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
