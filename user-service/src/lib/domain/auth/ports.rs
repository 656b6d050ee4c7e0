use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::CredentialError;
use crate::domain::auth::errors::TokenIssueError;
use crate::domain::auth::errors::TokenStoreError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::models::Nickname;
use crate::domain::user::models::UserId;

/// Port for the session lifecycle: Register, Login, Logout and RefreshToken.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create an identity and open its first session.
    ///
    /// # Errors
    /// * `EmailTaken` / `NicknameTaken` - Uniqueness conflict
    /// * `Internal` - Hashing, issuance or storage failure
    async fn register(&self, command: RegisterCommand) -> Result<AuthTokens, AuthError>;

    /// Verify credentials and open a new session.
    ///
    /// # Errors
    /// * `UserNotFound` - No identity with this email
    /// * `InvalidPassword` - Password does not match
    /// * `Internal` - Issuance or storage failure
    async fn login(&self, command: LoginCommand) -> Result<AuthTokens, AuthError>;

    /// Close the session behind a refresh token.
    ///
    /// # Errors
    /// * `TokenNotFound` - Unknown or already revoked refresh token
    /// * `Internal` - Storage failure
    async fn logout(&self, refresh_token: &str) -> Result<(), AuthError>;

    /// Exchange a refresh token for a brand-new pair, revoking the old one.
    ///
    /// # Errors
    /// * `TokenNotFound` - Unknown, expired or already rotated refresh token
    /// * `Internal` - Identity missing, issuance or storage failure
    async fn refresh_token(&self, refresh_token: &str) -> Result<AuthTokens, AuthError>;
}

/// One-way password hashing.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredential` - Mismatch or malformed hash
    fn verify(&self, password: &str, hash: &str) -> Result<(), CredentialError>;
}

/// Issues access/refresh token pairs for an identity.
pub trait TokenIssuer: Send + Sync + 'static {
    fn issue(&self, user_id: &UserId, nickname: &Nickname) -> Result<AuthTokens, TokenIssueError>;
}

/// Session store: refresh token -> user id mappings with expiry.
///
/// Implementations must be safe for concurrent use by many calls.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Persist a refresh token. Saving a token that already exists is a no-op.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn save(
        &self,
        user_id: &UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenStoreError>;

    /// Resolve an unexpired refresh token to its owner.
    ///
    /// # Errors
    /// * `NotFound` - Token unknown or expired
    /// * `DatabaseError` - Database operation failed
    async fn find_user_id(&self, token: &str) -> Result<UserId, TokenStoreError>;

    /// Remove a refresh token.
    ///
    /// # Errors
    /// * `NotFound` - No row was deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, token: &str) -> Result<(), TokenStoreError>;
}
