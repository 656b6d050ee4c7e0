pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::room;
pub use domain::user::models::UserId;

pub mod proto {
    pub mod chat {
        tonic::include_proto!("chat");
    }
    pub mod user {
        tonic::include_proto!("user");
    }
}
