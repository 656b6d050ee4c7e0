use async_trait::async_trait;

use crate::domain::user::errors::UserDirectoryError;
use crate::domain::user::models::UserId;

/// Existence checks against user-service.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Check whether a user exists.
    ///
    /// # Arguments
    /// * `user_id` - User to look up
    /// * `bearer_token` - Caller's access token, forwarded to user-service
    ///
    /// # Errors
    /// * `UserDirectoryError` - Transport failure or unexpected status
    async fn user_exists(
        &self,
        user_id: UserId,
        bearer_token: &str,
    ) -> Result<bool, UserDirectoryError>;
}
