pub mod user;

pub use user::GrpcUserDirectory;
