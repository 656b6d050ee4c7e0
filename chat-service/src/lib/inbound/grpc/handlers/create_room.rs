use std::sync::Arc;

use pipeline::Principal;
use tonic::metadata::MetadataMap;
use tonic::Request;
use tonic::Status;

use crate::domain::room::ports::RoomServicePort;
use crate::domain::user::models::UserId;
use crate::proto::chat::CreateRoomRequest;
use crate::proto::chat::CreateRoomResponse;

const BEARER_PREFIX: &str = "Bearer ";

pub async fn create_room<S: RoomServicePort>(
    service: Arc<S>,
    request: Request<CreateRoomRequest>,
) -> Result<CreateRoomResponse, Status> {
    let initiator = request
        .extensions()
        .get::<Principal>()
        .and_then(|principal| UserId::from_string(&principal.subject).ok())
        .ok_or_else(|| Status::unauthenticated("invalid token"))?;
    let bearer_token = bearer_token(request.metadata())?;
    let participant = UserId(request.into_inner().participant_id);

    let room = service
        .create_room(initiator, participant, &bearer_token)
        .await?;

    Ok(CreateRoomResponse {
        room: Some(room.into()),
    })
}

fn bearer_token(metadata: &MetadataMap) -> Result<String, Status> {
    metadata
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(|token| token.trim().to_string())
        .ok_or_else(|| Status::unauthenticated("missing token"))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;
    use tonic::Code;

    use super::*;
    use crate::domain::room::errors::RoomError;
    use crate::domain::room::models::Room;
    use crate::domain::room::models::RoomId;

    mock! {
        pub TestRoomService {}

        #[async_trait]
        impl RoomServicePort for TestRoomService {
            async fn create_room(
                &self,
                initiator: UserId,
                participant: UserId,
                bearer_token: &str,
            ) -> Result<Room, RoomError>;
        }
    }

    fn authenticated(participant_id: i64, subject: &str) -> Request<CreateRoomRequest> {
        let mut request = Request::new(CreateRoomRequest { participant_id });
        request
            .metadata_mut()
            .insert("authorization", "Bearer access.token".parse().unwrap());
        request.extensions_mut().insert(Principal {
            subject: subject.to_string(),
            nickname: "ann".to_string(),
        });
        request
    }

    #[tokio::test]
    async fn test_create_room_uses_principal_and_token() {
        let mut service = MockTestRoomService::new();
        service
            .expect_create_room()
            .with(eq(UserId(1)), eq(UserId(2)), eq("access.token"))
            .times(1)
            .returning(|initiator, participant, _| {
                Ok(Room {
                    id: RoomId::new(),
                    initiator_id: initiator,
                    participant_id: participant,
                    created_at: Utc::now(),
                })
            });

        let response = create_room(Arc::new(service), authenticated(2, "1"))
            .await
            .unwrap();

        let room = response.room.unwrap();
        assert_eq!(room.initiator_id, 1);
        assert_eq!(room.participant_id, 2);
    }

    #[tokio::test]
    async fn test_create_room_rejects_non_numeric_subject() {
        let mut service = MockTestRoomService::new();
        service.expect_create_room().times(0);

        let status = create_room(Arc::new(service), authenticated(2, "ann"))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Unauthenticated);
    }

    #[tokio::test]
    async fn test_create_room_rejects_non_positive_subject() {
        for subject in ["0", "-5"] {
            let mut service = MockTestRoomService::new();
            service.expect_create_room().times(0);

            let status = create_room(Arc::new(service), authenticated(2, subject))
                .await
                .unwrap_err();

            assert_eq!(status.code(), Code::Unauthenticated);
            assert_eq!(status.message(), "invalid token");
        }
    }

    #[tokio::test]
    async fn test_create_room_without_principal() {
        let mut service = MockTestRoomService::new();
        service.expect_create_room().times(0);

        let status = create_room(Arc::new(service), Request::new(CreateRoomRequest { participant_id: 2 }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Unauthenticated);
    }

    #[tokio::test]
    async fn test_create_room_maps_domain_error() {
        let mut service = MockTestRoomService::new();
        service
            .expect_create_room()
            .returning(|_, participant, _| Err(RoomError::ParticipantNotFound(participant)));

        let status = create_room(Arc::new(service), authenticated(5, "1"))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "participant not found");
    }
}
