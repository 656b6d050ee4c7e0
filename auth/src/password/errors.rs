use thiserror::Error;

/// Error type for password operations.
///
/// Verification has a single failure signal: a malformed stored
/// hash and a wrong password are indistinguishable to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid credential")]
    InvalidCredential,
}
