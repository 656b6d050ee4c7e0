use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tonic::Status;
use tracing::Instrument;

/// Per-method deadlines with a fallback for unlisted methods.
#[derive(Debug, Clone)]
pub struct TimeoutTable {
    default: Duration,
    per_method: HashMap<String, Duration>,
}

impl TimeoutTable {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(default: Duration) -> Self {
        Self {
            default,
            per_method: HashMap::new(),
        }
    }

    /// Set the deadline of a fully-qualified method (`/package.Service/Method`).
    pub fn with_method(mut self, method: impl Into<String>, timeout: Duration) -> Self {
        self.per_method.insert(method.into(), timeout);
        self
    }

    pub fn for_method(&self, method: &str) -> Duration {
        self.per_method
            .get(method)
            .copied()
            .unwrap_or(self.default)
    }

    pub fn default_timeout(&self) -> Duration {
        self.default
    }
}

impl Default for TimeoutTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

/// Race `call` against a timer.
///
/// `call` is spawned onto its own task. When the timer fires first the caller
/// gets `DeadlineExceeded` immediately and the task is detached: it keeps
/// running to completion in the background and its result is discarded.
pub async fn run_with_deadline<T, F>(method: &str, timeout: Duration, call: F) -> Result<T, Status>
where
    T: Send + 'static,
    F: Future<Output = Result<T, Status>> + Send + 'static,
{
    let handle = tokio::spawn(call.in_current_span());

    tokio::select! {
        joined = handle => joined.unwrap_or_else(|e| {
            tracing::error!(method = method, error = %e, "Handler task failed");
            Err(Status::internal("internal error"))
        }),
        _ = tokio::time::sleep(timeout) => {
            tracing::warn!(
                method = method,
                timeout_ms = timeout.as_millis() as u64,
                "Request deadline exceeded"
            );
            Err(Status::deadline_exceeded(format!(
                "request timed out after {:?} on {}",
                timeout, method
            )))
        }
    }
}
