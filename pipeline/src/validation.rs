use thiserror::Error;
use tonic::Status;

/// Reason a message failed its self-check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Capability of an inbound message to check its own structure.
///
/// Messages without rules implement this with the provided default, which
/// accepts everything.
pub trait Validatable {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Run the message self-check, mapping a failure to `InvalidArgument`.
pub fn check<T: Validatable>(method: &str, message: &T) -> Result<(), Status> {
    message.validate().map_err(|e| {
        tracing::warn!(method = method, reason = %e, "Request failed validation");
        Status::invalid_argument(format!("invalid argument: {}", e))
    })
}
