//! User domain
//!
//! User records as seen by authentication, the directory trait that serves
//! them, and registration input rules.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserRole};
pub use repository::UserRepository;
pub use validation::{validate_password, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
