use async_trait::async_trait;
use tonic::metadata::Ascii;
use tonic::metadata::MetadataValue;
use tonic::transport::Channel;
use tonic::transport::Endpoint;
use tonic::Code;

use crate::domain::user::errors::UserDirectoryError;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserDirectory;
use crate::proto::user::internal_user_service_client::InternalUserServiceClient;
use crate::proto::user::FetchUserProfileByIdRequest;

/// User directory backed by `user.InternalUserService` of user-service.
pub struct GrpcUserDirectory {
    client: InternalUserServiceClient<Channel>,
}

impl GrpcUserDirectory {
    /// Create a client for user-service. The connection is established on first use.
    ///
    /// # Errors
    /// * `tonic::transport::Error` - `url` is not a valid endpoint
    pub fn new(url: &str) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(url.to_string())?.connect_lazy();
        Ok(Self {
            client: InternalUserServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl UserDirectory for GrpcUserDirectory {
    async fn user_exists(
        &self,
        user_id: UserId,
        bearer_token: &str,
    ) -> Result<bool, UserDirectoryError> {
        let mut request = tonic::Request::new(FetchUserProfileByIdRequest {
            user_id: user_id.as_i64(),
        });

        let authorization: MetadataValue<Ascii> = format!("Bearer {}", bearer_token)
            .parse()
            .map_err(|_| UserDirectoryError("bearer token is not valid metadata".to_string()))?;
        request.metadata_mut().insert("authorization", authorization);

        let mut client = self.client.clone();
        match client.fetch_user_profile_by_id(request).await {
            Ok(_) => Ok(true),
            Err(status) if status.code() == Code::NotFound => Ok(false),
            Err(status) => {
                tracing::warn!(
                    user_id = %user_id,
                    code = ?status.code(),
                    message = %status.message(),
                    "User-service lookup failed"
                );
                Err(UserDirectoryError(format!(
                    "{:?}: {}",
                    status.code(),
                    status.message()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_accepts_endpoint_url() {
        assert!(GrpcUserDirectory::new("http://localhost:50051").is_ok());
    }

    #[tokio::test]
    async fn test_new_rejects_malformed_url() {
        assert!(GrpcUserDirectory::new("not a url").is_err());
    }
}
