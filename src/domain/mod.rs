//! Domain layer - Core business logic and entities

pub mod auth;
pub mod error;
pub mod user;

pub use auth::{AuthError, AuthErrorCode, Claims, TokenDetails, TokenDetailsBuilder};
pub use error::DomainError;
pub use user::{User, UserId, UserRepository, UserRole};
