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
use crate::proto::user_auth::AuthTokenResponse;
use crate::proto::user_auth::RegisterRequest;

pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let request = grpc_request(RegisterRequest::from(body), &headers)?;

    state
        .auth
        .register(request)
        .await
        .map_err(ApiError::from)
        .map(|response| ApiSuccess::new(StatusCode::CREATED, response.into_inner().into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    user_name: String,
    email: String,
    password: String,
    nickname: String,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    avatar_url: String,
}

impl From<RegisterRequestBody> for RegisterRequest {
    fn from(body: RegisterRequestBody) -> Self {
        Self {
            user_name: body.user_name,
            email: body.email,
            password: body.password,
            nickname: body.nickname,
            bio: body.bio,
            avatar_url: body.avatar_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<AuthTokenResponse> for TokenResponseData {
    fn from(response: AuthTokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}
