use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Number of random bytes behind every refresh token.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Freshly issued access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Signed, self-contained access token
    pub access_token: String,
    /// Opaque random refresh token
    pub refresh_token: String,
    /// Access token expiry
    pub expires_at: DateTime<Utc>,
}

/// Token issuance errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailed(#[from] JwtError),

    #[error("Random source failure: {0}")]
    RandomSource(String),
}

/// Issues access/refresh token pairs.
///
/// Access tokens are HS256 JWTs valid for the configured lifetime; refresh
/// tokens are URL-safe base64 encodings of OS-sourced random bytes.
pub struct TokenPairGenerator {
    jwt_handler: JwtHandler,
    access_lifetime: Duration,
}

impl TokenPairGenerator {
    /// Create a new generator.
    ///
    /// # Arguments
    /// * `secret` - Shared secret for signing access tokens
    /// * `access_lifetime` - Validity window of each access token
    pub fn new(secret: &[u8], access_lifetime: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            access_lifetime,
        }
    }

    /// Create a signed access token and a random refresh token for a subject.
    ///
    /// # Arguments
    /// * `subject` - User identifier embedded as `sub`
    /// * `nickname` - Display name embedded in the token
    ///
    /// # Errors
    /// * `SigningFailed` - Access token could not be signed
    /// * `RandomSource` - Refresh token entropy unavailable
    pub fn create_token_pair(
        &self,
        subject: impl ToString,
        nickname: &str,
    ) -> Result<TokenPair, TokenError> {
        let claims = AccessClaims::for_user(subject, nickname, self.access_lifetime);
        let access_token = self.jwt_handler.encode(&claims)?;
        let refresh_token = self.generate_refresh_token()?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_at: claims.expires_at(),
        })
    }

    /// Generate a standalone opaque refresh token.
    ///
    /// # Errors
    /// * `RandomSource` - The OS random source failed
    pub fn generate_refresh_token(&self) -> Result<String, TokenError> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TokenError::RandomSource(e.to_string()))?;

        Ok(URL_SAFE.encode(bytes))
    }

    /// Validate and decode an access token issued by this generator.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
