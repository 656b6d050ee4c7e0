use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::grpc_request;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::proto::user::FetchUserProfileByIdRequest;
use crate::proto::user::FetchUserProfileByNicknameRequest;
use crate::proto::user::UserProfile;

pub async fn get_user_by_nickname(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(nickname): Path<String>,
) -> Result<ApiSuccess<UserProfileData>, ApiError> {
    let request = grpc_request(FetchUserProfileByNicknameRequest { nickname }, &headers)?;

    state
        .users
        .fetch_user_profile_by_nickname(request)
        .await
        .map_err(ApiError::from)
        .map(|response| ApiSuccess::new(StatusCode::OK, response.into_inner().into()))
}

pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserProfileData>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let request = grpc_request(
        FetchUserProfileByIdRequest {
            user_id: user_id.as_i64(),
        },
        &headers,
    )?;

    state
        .internal_users
        .fetch_user_profile_by_id(request)
        .await
        .map_err(ApiError::from)
        .map(|response| ApiSuccess::new(StatusCode::OK, response.into_inner().into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileData {
    pub id: i64,
    pub user_name: String,
    pub email: String,
    pub nickname: String,
    pub bio: String,
    pub avatar_url: String,
    pub created_at: String,
    pub updated_at: String,
    pub last_login: Option<String>,
}

impl From<UserProfile> for UserProfileData {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            user_name: profile.user_name,
            email: profile.email,
            nickname: profile.nickname,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
            last_login: Some(profile.last_login).filter(|at| !at.is_empty()),
        }
    }
}
