use std::sync::Arc;

use tonic::Status;

use crate::domain::user::models::Nickname;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::proto::user::FetchUserProfileByIdRequest;
use crate::proto::user::FetchUserProfileByNicknameRequest;
use crate::proto::user::UserProfile;

pub async fn by_nickname<S: UserServicePort>(
    service: Arc<S>,
    request: FetchUserProfileByNicknameRequest,
) -> Result<UserProfile, Status> {
    let nickname = Nickname::new(request.nickname)
        .map_err(|e| Status::invalid_argument(format!("invalid argument: {}", e)))?;

    let user = service.get_user_by_nickname(&nickname).await?;
    Ok(user.into())
}

pub async fn by_id<S: UserServicePort>(
    service: Arc<S>,
    request: FetchUserProfileByIdRequest,
) -> Result<UserProfile, Status> {
    let user = service.get_user_by_id(&UserId(request.user_id)).await?;
    Ok(user.into())
}
