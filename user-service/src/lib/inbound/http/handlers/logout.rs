use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::grpc_request;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::proto::user_auth::RefreshTokenPayload;

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RefreshTokenBody>,
) -> Result<ApiSuccess<LogoutResponseData>, ApiError> {
    let request = grpc_request(RefreshTokenPayload::from(body), &headers)?;

    state
        .auth
        .logout(request)
        .await
        .map_err(ApiError::from)
        .map(|response| {
            ApiSuccess::new(
                StatusCode::OK,
                LogoutResponseData {
                    message: response.into_inner().message,
                },
            )
        })
}

/// Body shared by the logout and refresh routes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshTokenBody {
    refresh_token: String,
}

impl From<RefreshTokenBody> for RefreshTokenPayload {
    fn from(body: RefreshTokenBody) -> Self {
        Self {
            refresh_token: body.refresh_token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
