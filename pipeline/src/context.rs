use std::time::Duration;

use tokio::time::Instant;

/// Per-call information available to handlers through request extensions.
#[derive(Debug, Clone, Copy)]
pub struct CallContext {
    pub method: &'static str,
    pub deadline: Instant,
}

impl CallContext {
    pub fn new(method: &'static str, timeout: Duration) -> Self {
        Self {
            method,
            deadline: Instant::now() + timeout,
        }
    }
}

/// Verified identity of the caller, taken from the access token claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Subject claim (user identifier)
    pub subject: String,
    /// Display name claim
    pub nickname: String,
}
