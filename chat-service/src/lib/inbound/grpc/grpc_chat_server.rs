use std::sync::Arc;

use pipeline::Pipeline;
use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::create_room;
use super::methods;
use crate::domain::room::ports::RoomServicePort;
use crate::proto::chat::chat_service_server::ChatService as ChatServiceProto;
use crate::proto::chat::CreateRoomRequest;
use crate::proto::chat::CreateRoomResponse;

/// Room management (`chat.ChatService`).
pub struct ChatGrpcService<S: RoomServicePort> {
    service: Arc<S>,
    pipeline: Pipeline,
}

impl<S: RoomServicePort> ChatGrpcService<S> {
    pub fn new(service: Arc<S>, pipeline: Pipeline) -> Self {
        Self { service, pipeline }
    }
}

#[tonic::async_trait]
impl<S: RoomServicePort> ChatServiceProto for ChatGrpcService<S> {
    async fn create_room(
        &self,
        request: Request<CreateRoomRequest>,
    ) -> Result<Response<CreateRoomResponse>, Status> {
        let service = Arc::clone(&self.service);
        self.pipeline
            .call(methods::CREATE_ROOM, request, move |request| async move {
                create_room::create_room(service, request).await.map(Response::new)
            })
            .await
    }
}
