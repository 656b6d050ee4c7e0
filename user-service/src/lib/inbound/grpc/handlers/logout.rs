use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::proto::user_auth::LogoutResponse;
use crate::proto::user_auth::RefreshTokenPayload;

pub const LOGOUT_MESSAGE: &str = "logged out";

pub async fn logout<S: AuthServicePort>(
    service: Arc<S>,
    request: RefreshTokenPayload,
) -> Result<LogoutResponse, Status> {
    service.logout(&request.refresh_token).await?;

    Ok(LogoutResponse {
        message: LOGOUT_MESSAGE.to_string(),
    })
}
