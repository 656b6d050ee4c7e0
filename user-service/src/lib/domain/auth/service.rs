use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::CredentialError;
use crate::domain::auth::errors::TokenStoreError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::auth::ports::TokenRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Default lifetime of a refresh token.
pub const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Session lifecycle orchestrator.
///
/// Holds no state of its own beyond the injected stores, hasher and issuer;
/// every call is a complete transition.
pub struct AuthService<UR, TR, H, TI>
where
    UR: UserRepository,
    TR: TokenRepository,
    H: CredentialHasher,
    TI: TokenIssuer,
{
    users: Arc<UR>,
    tokens: Arc<TR>,
    hasher: Arc<H>,
    issuer: Arc<TI>,
    refresh_ttl: Duration,
}

impl<UR, TR, H, TI> AuthService<UR, TR, H, TI>
where
    UR: UserRepository,
    TR: TokenRepository,
    H: CredentialHasher,
    TI: TokenIssuer,
{
    /// Create a new auth service with the default refresh token lifetime.
    ///
    /// # Arguments
    /// * `users` - Identity store
    /// * `tokens` - Session store
    /// * `hasher` - Password hashing implementation
    /// * `issuer` - Token pair issuance implementation
    pub fn new(users: Arc<UR>, tokens: Arc<TR>, hasher: Arc<H>, issuer: Arc<TI>) -> Self {
        Self {
            users,
            tokens,
            hasher,
            issuer,
            refresh_ttl: Duration::days(DEFAULT_REFRESH_TOKEN_TTL_DAYS),
        }
    }

    pub fn with_refresh_ttl(mut self, refresh_ttl: Duration) -> Self {
        self.refresh_ttl = refresh_ttl;
        self
    }

    /// Issue a token pair for `user` and persist its refresh half.
    async fn open_session(&self, user: &User) -> Result<AuthTokens, AuthError> {
        let tokens = self
            .issuer
            .issue(&user.id, &user.nickname)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let expires_at = Utc::now() + self.refresh_ttl;
        self.tokens
            .save(&user.id, &tokens.refresh_token, expires_at)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(tokens)
    }
}

fn from_token_store(error: TokenStoreError) -> AuthError {
    match error {
        TokenStoreError::NotFound => AuthError::TokenNotFound,
        TokenStoreError::DatabaseError(e) => AuthError::Internal(e),
    }
}

#[async_trait]
impl<UR, TR, H, TI> AuthServicePort for AuthService<UR, TR, H, TI>
where
    UR: UserRepository,
    TR: TokenRepository,
    H: CredentialHasher,
    TI: TokenIssuer,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthTokens, AuthError> {
        let password_hash = self
            .hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let new_user = NewUser {
            username: command.username,
            email: command.email,
            nickname: command.nickname,
            password_hash,
            bio: command.bio,
            avatar_url: command.avatar_url,
        };

        let user = self.users.create(new_user).await.map_err(|e| match e {
            UserError::EmailTaken(email) => AuthError::EmailTaken(email),
            UserError::NicknameTaken(nickname) => AuthError::NicknameTaken(nickname),
            other => AuthError::Internal(other.to_string()),
        })?;

        let tokens = self.open_session(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(tokens)
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthTokens, AuthError> {
        let user = self
            .users
            .find_by_email(&command.email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| AuthError::UserNotFound(command.email.to_string()))?;

        self.hasher
            .verify(&command.password, &user.password_hash)
            .map_err(|e| match e {
                CredentialError::InvalidCredential => AuthError::InvalidPassword,
                CredentialError::HashingFailed(e) => AuthError::Internal(e),
            })?;

        let tokens = self.open_session(&user).await?;

        if let Err(e) = self.users.record_login(&user.id, Utc::now()).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to record last login");
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(tokens)
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        self.tokens
            .delete(refresh_token)
            .await
            .map_err(from_token_store)?;

        tracing::info!("Session closed");
        Ok(())
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthTokens, AuthError> {
        let user_id = self
            .tokens
            .find_user_id(refresh_token)
            .await
            .map_err(from_token_store)?;

        let user = self
            .users
            .find_by_id(&user_id)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| {
                AuthError::Internal(format!("refresh token owner {} does not exist", user_id))
            })?;

        // Old token is revoked before its successor exists. A failure between
        // this delete and the save in open_session leaves the session without
        // a refresh token; the client recovers by logging in again. When a
        // concurrent refresh deleted the token first, this call loses with
        // TokenNotFound.
        self.tokens
            .delete(refresh_token)
            .await
            .map_err(from_token_store)?;

        let tokens = self.open_session(&user).await?;

        tracing::info!(user_id = %user.id, "Refresh token rotated");
        Ok(tokens)
    }
}
