pub mod grpc_auth_server;
pub mod grpc_user_server;
pub mod handlers;
pub mod methods;
pub mod validation;

pub use grpc_auth_server::AuthGrpcService;
pub use grpc_user_server::InternalUserGrpcService;
pub use grpc_user_server::UserGrpcService;
