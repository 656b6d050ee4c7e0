use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::ports::AuthServicePort;
use crate::proto::user_auth::AuthTokenResponse;
use crate::proto::user_auth::RefreshTokenPayload;

pub async fn refresh_token<S: AuthServicePort>(
    service: Arc<S>,
    request: RefreshTokenPayload,
) -> Result<AuthTokenResponse, Status> {
    let tokens = service.refresh_token(&request.refresh_token).await?;
    Ok(tokens.into())
}
