//! User infrastructure module
//!
//! Argon2 password hashing, the in-memory user directory, and the user
//! service used for registration and seeding.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{RegisterUserRequest, SeedUser, UserService};

#[cfg(test)]
pub use password::MockPasswordHasher;
