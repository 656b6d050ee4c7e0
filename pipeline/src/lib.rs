//! Request pipeline for unary gRPC calls.
//!
//! Every inbound call passes three stages in a fixed order before reaching
//! its handler:
//!
//! 1. validation: messages implementing [`Validatable`] are self-checked,
//!    failures become `InvalidArgument`;
//! 2. timeout: the rest of the call runs on its own task, raced against a
//!    per-method deadline (`DeadlineExceeded` when the timer wins);
//! 3. authentication: methods outside the public allow-list need a valid
//!    `authorization: Bearer <jwt>` entry, the verified [`Principal`] is
//!    placed in the request extensions.

pub mod authentication;
pub mod context;
pub mod pipeline;
pub mod timeout;
pub mod validation;

pub use authentication::AuthRejection;
pub use authentication::Authenticator;
pub use context::CallContext;
pub use context::Principal;
pub use pipeline::Pipeline;
pub use timeout::TimeoutTable;
pub use validation::Validatable;
pub use validation::ValidationError;
