use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;

/// Room unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Generate a new random room ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One-to-one chat room between the user who opened it and a participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub initiator_id: UserId,
    pub participant_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(initiator_id: UserId, participant_id: UserId) -> Self {
        Self {
            id: RoomId::new(),
            initiator_id,
            participant_id,
            created_at: Utc::now(),
        }
    }
}
