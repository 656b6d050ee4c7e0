use pipeline::Validatable;
use pipeline::ValidationError;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Nickname;
use crate::proto::user::FetchUserProfileByIdRequest;
use crate::proto::user::FetchUserProfileByNicknameRequest;
use crate::proto::user_auth::LoginRequest;
use crate::proto::user_auth::RefreshTokenPayload;
use crate::proto::user_auth::RegisterRequest;

pub const MIN_PASSWORD_LENGTH: usize = 6;

fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

impl Validatable for RegisterRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("user_name", &self.user_name)?;
        required("email", &self.email)?;
        required("password", &self.password)?;
        required("nickname", &self.nickname)?;

        EmailAddress::new(self.email.clone()).map_err(|e| ValidationError::new(e.to_string()))?;
        Nickname::new(self.nickname.clone()).map_err(|e| ValidationError::new(e.to_string()))?;

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::new(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(())
    }
}

impl Validatable for LoginRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("email", &self.email)?;
        required("password", &self.password)
    }
}

impl Validatable for RefreshTokenPayload {
    fn validate(&self) -> Result<(), ValidationError> {
        required("refresh_token", &self.refresh_token)
    }
}

impl Validatable for FetchUserProfileByNicknameRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("nickname", &self.nickname)
    }
}

impl Validatable for FetchUserProfileByIdRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id <= 0 {
            return Err(ValidationError::new("user_id must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            user_name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            nickname: "ann".to_string(),
            bio: String::new(),
            avatar_url: String::new(),
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(register_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_fields() {
        let mut request = register_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());

        let mut request = register_request();
        request.password = "short".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("at least 6"));

        let mut request = register_request();
        request.nickname = "a b".to_string();
        assert!(request.validate().is_err());

        let mut request = register_request();
        request.user_name = "  ".to_string();
        assert_eq!(
            request.validate(),
            Err(ValidationError::new("user_name must not be empty"))
        );
    }

    #[test]
    fn test_refresh_payload_requires_token() {
        let payload = RefreshTokenPayload {
            refresh_token: String::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_profile_by_id_requires_positive_id() {
        assert!(FetchUserProfileByIdRequest { user_id: 0 }.validate().is_err());
        assert!(FetchUserProfileByIdRequest { user_id: 3 }.validate().is_ok());
    }
}
