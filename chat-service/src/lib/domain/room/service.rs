use std::sync::Arc;

use async_trait::async_trait;

use super::errors::RoomError;
use super::models::Room;
use super::ports::RoomRepository;
use super::ports::RoomServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserDirectory;

/// Concrete implementation of RoomServicePort.
///
/// Generic over repository and user directory for testability.
pub struct RoomService<RR, UD>
where
    RR: RoomRepository,
    UD: UserDirectory,
{
    room_repository: Arc<RR>,
    user_directory: Arc<UD>,
}

impl<RR, UD> RoomService<RR, UD>
where
    RR: RoomRepository,
    UD: UserDirectory,
{
    pub fn new(room_repository: Arc<RR>, user_directory: Arc<UD>) -> Self {
        Self {
            room_repository,
            user_directory,
        }
    }
}

#[async_trait]
impl<RR, UD> RoomServicePort for RoomService<RR, UD>
where
    RR: RoomRepository,
    UD: UserDirectory,
{
    async fn create_room(
        &self,
        initiator: UserId,
        participant: UserId,
        bearer_token: &str,
    ) -> Result<Room, RoomError> {
        if initiator == participant {
            return Err(RoomError::SelfRoom);
        }

        if !self
            .user_directory
            .user_exists(participant, bearer_token)
            .await?
        {
            return Err(RoomError::ParticipantNotFound(participant));
        }

        let room = self
            .room_repository
            .create(Room::new(initiator, participant))
            .await?;

        tracing::info!(
            room_id = %room.id,
            initiator_id = %room.initiator_id,
            participant_id = %room.participant_id,
            "Room created"
        );

        Ok(room)
    }
}
