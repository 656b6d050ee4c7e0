use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenPairGenerator;

use crate::domain::auth::errors::CredentialError;
use crate::domain::auth::errors::TokenIssueError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::user::models::Nickname;
use crate::domain::user::models::UserId;

/// Argon2id credential hasher backed by the `auth` crate.
#[derive(Debug, Clone, Default)]
pub struct Argon2CredentialHasher {
    inner: PasswordHasher,
}

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self {
            inner: PasswordHasher::new(),
        }
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        self.inner.hash(password).map_err(|e| match e {
            PasswordError::HashingFailed(e) => CredentialError::HashingFailed(e),
            PasswordError::InvalidCredential => CredentialError::InvalidCredential,
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<(), CredentialError> {
        self.inner
            .verify(password, hash)
            .map_err(|_| CredentialError::InvalidCredential)
    }
}

/// JWT access token and random refresh token issuer.
pub struct JwtTokenIssuer {
    generator: TokenPairGenerator,
}

impl JwtTokenIssuer {
    pub fn new(generator: TokenPairGenerator) -> Self {
        Self { generator }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: &UserId, nickname: &Nickname) -> Result<AuthTokens, TokenIssueError> {
        let pair = self
            .generator
            .create_token_pair(user_id, nickname.as_str())
            .map_err(|e| TokenIssueError(e.to_string()))?;

        Ok(AuthTokens {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_hasher_round_trip() {
        let hasher = Argon2CredentialHasher::new();

        let hash = hasher.hash("secret").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("secret", &hash).is_ok());
        assert_eq!(
            hasher.verify("wrong", &hash),
            Err(CredentialError::InvalidCredential)
        );
    }

    #[test]
    fn test_issuer_embeds_subject() {
        let generator =
            TokenPairGenerator::new(b"test_secret_key_at_least_32_bytes!", Duration::minutes(15));
        let verifier =
            TokenPairGenerator::new(b"test_secret_key_at_least_32_bytes!", Duration::minutes(15));
        let issuer = JwtTokenIssuer::new(generator);

        let nickname = Nickname::new("ann".to_string()).unwrap();
        let tokens = issuer.issue(&UserId(12), &nickname).unwrap();

        assert!(!tokens.refresh_token.is_empty());
        let claims = verifier.verify_access_token(&tokens.access_token).unwrap();
        assert_eq!(claims.sub, "12");
        assert_eq!(claims.nickname, "ann");
    }
}
