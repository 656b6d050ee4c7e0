use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tonic::metadata::Ascii;
use tonic::metadata::MetadataValue;
use tonic::Code;
use tonic::Status;

pub mod get_user;
pub mod login;
pub mod logout;
pub mod refresh_token;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    GatewayTimeout(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<Status> for ApiError {
    fn from(status: Status) -> Self {
        let message = status.message().to_string();
        match status.code() {
            Code::InvalidArgument => ApiError::BadRequest(message),
            Code::Unauthenticated => ApiError::Unauthorized(message),
            Code::NotFound => ApiError::NotFound(message),
            Code::AlreadyExists => ApiError::Conflict(message),
            Code::DeadlineExceeded => ApiError::GatewayTimeout(message),
            _ => ApiError::InternalServerError(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Wrap a gateway payload in a gRPC request, forwarding the caller's
/// `Authorization` header as call metadata.
pub fn grpc_request<T>(message: T, headers: &HeaderMap) -> Result<tonic::Request<T>, ApiError> {
    let mut request = tonic::Request::new(message);

    if let Some(value) = headers.get(AUTHORIZATION) {
        let value = value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<MetadataValue<Ascii>>().ok())
            .ok_or_else(|| ApiError::Unauthorized("invalid token".to_string()))?;
        request.metadata_mut().insert("authorization", value);
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_status_to_api_error() {
        assert_eq!(
            ApiError::from(Status::already_exists("email already taken")),
            ApiError::Conflict("email already taken".to_string())
        );
        assert_eq!(
            ApiError::from(Status::deadline_exceeded("late")),
            ApiError::GatewayTimeout("late".to_string())
        );
        assert_eq!(
            ApiError::from(Status::unavailable("down")),
            ApiError::InternalServerError("down".to_string())
        );
    }

    #[test]
    fn test_grpc_request_forwards_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

        let request = grpc_request((), &headers).unwrap();
        assert_eq!(
            request
                .metadata()
                .get("authorization")
                .unwrap()
                .to_str()
                .unwrap(),
            "Bearer abc.def.ghi"
        );
    }

    #[test]
    fn test_grpc_request_without_header_has_empty_metadata() {
        let request = grpc_request((), &HeaderMap::new()).unwrap();
        assert!(request.metadata().is_empty());
    }
}
