use thiserror::Error;

/// Error for credential hashing and verification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid credential")]
    InvalidCredential,
}

/// Error for token pair issuance
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Token issuance failed: {0}")]
pub struct TokenIssueError(pub String);

/// Error for refresh token store operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenStoreError {
    #[error("Refresh token not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Session lifecycle errors surfaced to the inbound adapters.
///
/// Storage and issuance details are collapsed into `Internal`; the message is
/// logged server-side and never sent to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already taken: {0}")]
    EmailTaken(String),

    #[error("Nickname already taken: {0}")]
    NicknameTaken(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Refresh token not found")]
    TokenNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}
