//! Authentication utilities library
//!
//! Provides reusable credential and token infrastructure for the services:
//! - Password hashing (Argon2id)
//! - Access token signing and validation (HS256 JWT)
//! - Access/refresh token pair issuance
//!
//! Each service defines its own authentication traits and adapts these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Token Pairs
//! ```
//! use auth::TokenPairGenerator;
//! use chrono::Duration;
//!
//! let generator = TokenPairGenerator::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(15));
//! let pair = generator.create_token_pair(42, "ann").unwrap();
//! let claims = generator.verify_access_token(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "42");
//! ```

pub mod jwt;
pub mod password;
pub mod tokens;

pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use tokens::TokenError;
pub use tokens::TokenPair;
pub use tokens::TokenPairGenerator;
