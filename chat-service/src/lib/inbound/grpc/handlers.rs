use tonic::Status;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::Room;
use crate::proto::chat::Room as RoomProto;

pub mod create_room;

impl From<Room> for RoomProto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.to_string(),
            initiator_id: room.initiator_id.as_i64(),
            participant_id: room.participant_id.as_i64(),
            created_at: room.created_at.to_rfc3339(),
        }
    }
}

impl From<RoomError> for Status {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::SelfRoom => Status::invalid_argument("cannot create a room with yourself"),
            RoomError::ParticipantNotFound(_) => Status::not_found("participant not found"),
            RoomError::UserDirectory(cause) => {
                tracing::error!(error = %cause, "Participant check failed");
                Status::internal("internal error")
            }
            RoomError::DatabaseError(cause) => {
                tracing::error!(error = %cause, "Room storage failed");
                Status::internal("internal error")
            }
        }
    }
}
