use tonic::Status;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::user::models::User;
use crate::proto::user::UserProfile;
use crate::proto::user_auth::AuthTokenResponse;
use crate::user::errors::UserError;

pub mod fetch_user_profile;
pub mod login;
pub mod logout;
pub mod refresh_token;
pub mod register;

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i64(),
            user_name: user.username,
            email: user.email.as_str().to_string(),
            nickname: user.nickname.as_str().to_string(),
            bio: user.bio,
            avatar_url: user.avatar_url,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
            last_login: user
                .last_login
                .map(|at| at.to_rfc3339())
                .unwrap_or_default(),
        }
    }
}

impl From<AuthTokens> for AuthTokenResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailTaken(_) => Status::already_exists("email already taken"),
            AuthError::NicknameTaken(_) => Status::already_exists("nickname already taken"),
            AuthError::UserNotFound(_) => Status::not_found("user not found"),
            AuthError::TokenNotFound => Status::not_found("refresh token not found"),
            AuthError::InvalidPassword => Status::unauthenticated("invalid password"),
            AuthError::Internal(cause) => {
                tracing::error!(error = %cause, "Auth operation failed");
                Status::internal("internal error")
            }
        }
    }
}

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByNickname(_) => {
                Status::not_found("user not found")
            }
            UserError::InvalidUserId(_) | UserError::InvalidNickname(_) | UserError::InvalidEmail(_) => {
                Status::invalid_argument(format!("invalid argument: {}", err))
            }
            UserError::EmailTaken(_) => Status::already_exists("email already taken"),
            UserError::NicknameTaken(_) => Status::already_exists("nickname already taken"),
            UserError::DatabaseError(cause) => {
                tracing::error!(error = %cause, "User lookup failed");
                Status::internal("internal error")
            }
        }
    }
}
