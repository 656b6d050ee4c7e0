pub mod grpc_chat_server;
pub mod handlers;
pub mod methods;
pub mod validation;

pub use grpc_chat_server::ChatGrpcService;
