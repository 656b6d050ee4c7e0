use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;

use super::grpc_request;
use super::logout::RefreshTokenBody;
use super::register::TokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::proto::user_auth::RefreshTokenPayload;

pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RefreshTokenBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let request = grpc_request(RefreshTokenPayload::from(body), &headers)?;

    state
        .auth
        .refresh_token(request)
        .await
        .map_err(ApiError::from)
        .map(|response| ApiSuccess::new(StatusCode::OK, response.into_inner().into()))
}
