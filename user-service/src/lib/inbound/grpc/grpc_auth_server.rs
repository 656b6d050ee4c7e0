use std::sync::Arc;

use pipeline::Pipeline;
use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::login;
use super::handlers::logout;
use super::handlers::refresh_token;
use super::handlers::register;
use super::methods;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::user_auth::auth_service_server::AuthService as AuthServiceProto;
use crate::proto::user_auth::AuthTokenResponse;
use crate::proto::user_auth::LoginRequest;
use crate::proto::user_auth::LogoutResponse;
use crate::proto::user_auth::RefreshTokenPayload;
use crate::proto::user_auth::RegisterRequest;

/// `user_auth.AuthService` over the session lifecycle, every method behind the pipeline.
pub struct AuthGrpcService<S: AuthServicePort> {
    service: Arc<S>,
    pipeline: Pipeline,
}

impl<S: AuthServicePort> AuthGrpcService<S> {
    pub fn new(service: Arc<S>, pipeline: Pipeline) -> Self {
        Self { service, pipeline }
    }
}

#[tonic::async_trait]
impl<S: AuthServicePort> AuthServiceProto for AuthGrpcService<S> {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<AuthTokenResponse>, Status> {
        let service = Arc::clone(&self.service);
        self.pipeline
            .call(methods::REGISTER, request, move |request| async move {
                register::register(service, request.into_inner())
                    .await
                    .map(Response::new)
            })
            .await
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<AuthTokenResponse>, Status> {
        let service = Arc::clone(&self.service);
        self.pipeline
            .call(methods::LOGIN, request, move |request| async move {
                login::login(service, request.into_inner())
                    .await
                    .map(Response::new)
            })
            .await
    }

    async fn logout(
        &self,
        request: Request<RefreshTokenPayload>,
    ) -> Result<Response<LogoutResponse>, Status> {
        let service = Arc::clone(&self.service);
        self.pipeline
            .call(methods::LOGOUT, request, move |request| async move {
                logout::logout(service, request.into_inner())
                    .await
                    .map(Response::new)
            })
            .await
    }

    async fn refresh_token(
        &self,
        request: Request<RefreshTokenPayload>,
    ) -> Result<Response<AuthTokenResponse>, Status> {
        let service = Arc::clone(&self.service);
        self.pipeline
            .call(methods::REFRESH_TOKEN, request, move |request| async move {
                refresh_token::refresh_token(service, request.into_inner())
                    .await
                    .map(Response::new)
            })
            .await
    }
}
