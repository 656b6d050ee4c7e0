use std::future::Future;
use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;
use tracing::Instrument;

use crate::authentication::Authenticator;
use crate::context::CallContext;
use crate::timeout;
use crate::timeout::TimeoutTable;
use crate::validation;
use crate::validation::Validatable;

/// Fixed validation -> timeout -> authentication chain around a handler.
///
/// Cheap to clone; every gRPC service of a process shares one instance.
#[derive(Clone)]
pub struct Pipeline {
    timeouts: Arc<TimeoutTable>,
    authenticator: Arc<Authenticator>,
}

impl Pipeline {
    pub fn new(timeouts: TimeoutTable, authenticator: Authenticator) -> Self {
        Self {
            timeouts: Arc::new(timeouts),
            authenticator: Arc::new(authenticator),
        }
    }

    /// Run `handler` for `request` behind all three stages.
    ///
    /// # Arguments
    /// * `method` - Fully-qualified method name (`/package.Service/Method`)
    /// * `request` - Inbound request with metadata
    /// * `handler` - The method implementation
    ///
    /// # Errors
    /// * `InvalidArgument` - Message failed its self-check
    /// * `DeadlineExceeded` - Handler did not finish within the method deadline
    /// * `Unauthenticated` - Protected method without a valid bearer token
    /// * Any status returned by the handler, unchanged
    pub async fn call<Req, Resp, H, Fut>(
        &self,
        method: &'static str,
        mut request: Request<Req>,
        handler: H,
    ) -> Result<Response<Resp>, Status>
    where
        Req: Validatable + Send + 'static,
        Resp: Send + 'static,
        H: FnOnce(Request<Req>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Response<Resp>, Status>> + Send + 'static,
    {
        let span = tracing::info_span!("grpc_call", method = method);

        async move {
            validation::check(method, request.get_ref())?;

            let deadline = self.timeouts.for_method(method);
            request
                .extensions_mut()
                .insert(CallContext::new(method, deadline));

            let authenticator = Arc::clone(&self.authenticator);
            let result = timeout::run_with_deadline(method, deadline, async move {
                let request = authenticator.authorize(method, request)?;
                handler(request).await
            })
            .await;

            match &result {
                Ok(_) => tracing::debug!("Call completed"),
                Err(status) => tracing::info!(
                    code = ?status.code(),
                    message = %status.message(),
                    "Call failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}
