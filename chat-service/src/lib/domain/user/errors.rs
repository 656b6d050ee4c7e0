use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user id: {0}")]
    InvalidFormat(String),
}

/// Failure to reach or query user-service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("User directory unavailable: {0}")]
pub struct UserDirectoryError(pub String);
