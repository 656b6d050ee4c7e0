use thiserror::Error;

use crate::domain::user::errors::UserDirectoryError;
use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("Cannot create a room with yourself")]
    SelfRoom,

    #[error("Participant not found: {0}")]
    ParticipantNotFound(UserId),

    #[error(transparent)]
    UserDirectory(#[from] UserDirectoryError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
