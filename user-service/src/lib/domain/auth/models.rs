use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Nickname;

/// Registration input after structural validation.
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub username: String,
    pub email: EmailAddress,
    pub nickname: Nickname,
    pub password: String,
    pub bio: String,
    pub avatar_url: String,
}

/// Login input after structural validation.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

/// Token pair handed back to the client after Register, Login and Refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}
