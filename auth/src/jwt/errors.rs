use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Unexpected signing algorithm")]
    InvalidAlgorithm,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
