use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::proto::user_auth::AuthTokenResponse;
use crate::proto::user_auth::LoginRequest;

pub async fn login<S: AuthServicePort>(
    service: Arc<S>,
    request: LoginRequest,
) -> Result<AuthTokenResponse, Status> {
    let email = EmailAddress::new(request.email)
        .map_err(|e| Status::invalid_argument(format!("invalid argument: {}", e)))?;

    let command = LoginCommand {
        email,
        password: request.password,
    };

    let tokens = service.login(command).await?;
    Ok(tokens.into())
}
