pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::user;
pub use outbound::repositories;

pub mod proto {
    pub mod user {
        tonic::include_proto!("user");
    }

    pub mod user_auth {
        tonic::include_proto!("user_auth");
    }
}
