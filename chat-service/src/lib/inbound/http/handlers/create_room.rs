use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::grpc_request;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::proto::chat::CreateRoomRequest;
use crate::proto::chat::Room;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRoomRequestBody {
    pub participant_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomData {
    pub id: String,
    pub initiator_id: i64,
    pub participant_id: i64,
    pub created_at: String,
}

impl From<Room> for RoomData {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            initiator_id: room.initiator_id,
            participant_id: room.participant_id,
            created_at: room.created_at,
        }
    }
}

pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateRoomRequestBody>,
) -> Result<ApiSuccess<RoomData>, ApiError> {
    let request = grpc_request(
        CreateRoomRequest {
            participant_id: body.participant_id,
        },
        &headers,
    )?;

    let room = state
        .chat
        .create_room(request)
        .await
        .map_err(ApiError::from)?
        .into_inner()
        .room
        .ok_or_else(|| ApiError::InternalServerError("internal error".to_string()))?;

    Ok(ApiSuccess::new(StatusCode::CREATED, room.into()))
}
