use async_trait::async_trait;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::Room;
use crate::domain::user::models::UserId;

/// Port for chat room operations.
#[async_trait]
pub trait RoomServicePort: Send + Sync + 'static {
    /// Open a room between the caller and another user.
    ///
    /// # Arguments
    /// * `initiator` - Authenticated caller
    /// * `participant` - User invited into the room
    /// * `bearer_token` - Caller's access token, used for the participant check
    ///
    /// # Errors
    /// * `SelfRoom` - Initiator and participant are the same user
    /// * `ParticipantNotFound` - Participant does not exist
    /// * `UserDirectory` - User-service could not be queried
    /// * `DatabaseError` - Room could not be stored
    async fn create_room(
        &self,
        initiator: UserId,
        participant: UserId,
        bearer_token: &str,
    ) -> Result<Room, RoomError>;
}

/// Persistence for chat rooms.
#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
    /// Store a new room.
    ///
    /// # Returns
    /// Room as persisted, with the store's creation timestamp
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, room: Room) -> Result<Room, RoomError>;
}
