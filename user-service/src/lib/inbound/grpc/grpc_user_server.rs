use std::sync::Arc;

use pipeline::Pipeline;
use pipeline::Principal;
use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::fetch_user_profile;
use super::methods;
use crate::domain::user::ports::UserServicePort;
use crate::proto::user::internal_user_service_server::InternalUserService as InternalUserServiceProto;
use crate::proto::user::user_service_server::UserService as UserServiceProto;
use crate::proto::user::FetchUserProfileByIdRequest;
use crate::proto::user::FetchUserProfileByNicknameRequest;
use crate::proto::user::UserProfile;

/// Public profile lookups (`user.UserService`).
pub struct UserGrpcService<S: UserServicePort> {
    service: Arc<S>,
    pipeline: Pipeline,
}

impl<S: UserServicePort> UserGrpcService<S> {
    pub fn new(service: Arc<S>, pipeline: Pipeline) -> Self {
        Self { service, pipeline }
    }
}

#[tonic::async_trait]
impl<S: UserServicePort> UserServiceProto for UserGrpcService<S> {
    async fn fetch_user_profile_by_nickname(
        &self,
        request: Request<FetchUserProfileByNicknameRequest>,
    ) -> Result<Response<UserProfile>, Status> {
        let service = Arc::clone(&self.service);
        self.pipeline
            .call(
                methods::FETCH_USER_PROFILE_BY_NICKNAME,
                request,
                move |request| async move {
                    fetch_user_profile::by_nickname(service, request.into_inner())
                        .await
                        .map(Response::new)
                },
            )
            .await
    }
}

/// Profile lookups for other platform services (`user.InternalUserService`).
pub struct InternalUserGrpcService<S: UserServicePort> {
    service: Arc<S>,
    pipeline: Pipeline,
}

impl<S: UserServicePort> InternalUserGrpcService<S> {
    pub fn new(service: Arc<S>, pipeline: Pipeline) -> Self {
        Self { service, pipeline }
    }
}

#[tonic::async_trait]
impl<S: UserServicePort> InternalUserServiceProto for InternalUserGrpcService<S> {
    async fn fetch_user_profile_by_id(
        &self,
        request: Request<FetchUserProfileByIdRequest>,
    ) -> Result<Response<UserProfile>, Status> {
        let service = Arc::clone(&self.service);
        self.pipeline
            .call(
                methods::FETCH_USER_PROFILE_BY_ID,
                request,
                move |request| async move {
                    if let Some(caller) = request.extensions().get::<Principal>() {
                        tracing::debug!(caller = %caller.subject, "Internal profile lookup");
                    }
                    fetch_user_profile::by_id(service, request.into_inner())
                        .await
                        .map(Response::new)
                },
            )
            .await
    }
}
