use std::collections::HashSet;

use auth::JwtHandler;
use thiserror::Error;
use tonic::metadata::MetadataMap;
use tonic::Request;
use tonic::Status;

use crate::context::Principal;

const AUTHORIZATION: &str = "authorization";
const BEARER_PREFIX: &str = "Bearer ";

/// Why a protected call was turned away.
///
/// Callers only ever see the short `Display` text; the carried cause of
/// `InvalidToken` is for server-side logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthRejection {
    #[error("missing metadata")]
    MissingMetadata,

    #[error("missing token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken(String),
}

impl From<AuthRejection> for Status {
    fn from(rejection: AuthRejection) -> Self {
        Status::unauthenticated(rejection.to_string())
    }
}

/// Bearer-token gate in front of every non-public method.
pub struct Authenticator {
    jwt_handler: JwtHandler,
    public_methods: HashSet<String>,
}

impl Authenticator {
    /// Create an authenticator.
    ///
    /// # Arguments
    /// * `jwt_handler` - Codec holding the shared signing secret
    /// * `public_methods` - Fully-qualified methods that skip authentication
    pub fn new<I, S>(jwt_handler: JwtHandler, public_methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            jwt_handler,
            public_methods: public_methods.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_public(&self, method: &str) -> bool {
        self.public_methods.contains(method)
    }

    /// Extract and verify the bearer token carried in call metadata.
    ///
    /// # Errors
    /// * `MissingMetadata` - The call carries no metadata at all
    /// * `MissingToken` - No `authorization` entry
    /// * `InvalidToken` - Wrong scheme, undecodable, foreign algorithm, bad signature or expired
    pub fn verify(&self, metadata: &MetadataMap) -> Result<Principal, AuthRejection> {
        if metadata.is_empty() {
            return Err(AuthRejection::MissingMetadata);
        }

        let value = metadata
            .get(AUTHORIZATION)
            .ok_or(AuthRejection::MissingToken)?;

        let value = value
            .to_str()
            .map_err(|e| AuthRejection::InvalidToken(format!("unreadable header: {}", e)))?;

        let token = value.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
            AuthRejection::InvalidToken("expected 'Bearer <token>'".to_string())
        })?;

        let claims = self
            .jwt_handler
            .decode(token.trim())
            .map_err(|e| AuthRejection::InvalidToken(e.to_string()))?;

        Ok(Principal {
            subject: claims.sub,
            nickname: claims.nickname,
        })
    }

    /// Let public calls through untouched; verify all others and attach the
    /// resulting [`Principal`] to the request extensions.
    pub fn authorize<T>(&self, method: &str, mut request: Request<T>) -> Result<Request<T>, Status> {
        if self.is_public(method) {
            return Ok(request);
        }

        let principal = self.verify(request.metadata()).map_err(|rejection| {
            tracing::warn!(method = method, reason = ?rejection, "Authentication failed");
            Status::from(rejection)
        })?;

        tracing::debug!(
            method = method,
            subject = %principal.subject,
            "Caller authenticated"
        );
        request.extensions_mut().insert(principal);

        Ok(request)
    }
}
