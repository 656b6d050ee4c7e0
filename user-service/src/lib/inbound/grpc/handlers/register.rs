use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Nickname;
use crate::proto::user_auth::AuthTokenResponse;
use crate::proto::user_auth::RegisterRequest;

pub async fn register<S: AuthServicePort>(
    service: Arc<S>,
    request: RegisterRequest,
) -> Result<AuthTokenResponse, Status> {
    let email = EmailAddress::new(request.email)
        .map_err(|e| Status::invalid_argument(format!("invalid argument: {}", e)))?;
    let nickname = Nickname::new(request.nickname)
        .map_err(|e| Status::invalid_argument(format!("invalid argument: {}", e)))?;

    let command = RegisterCommand {
        username: request.user_name,
        email,
        nickname,
        password: request.password,
        bio: request.bio,
        avatar_url: request.avatar_url,
    };

    let tokens = service.register(command).await?;
    Ok(tokens.into())
}
