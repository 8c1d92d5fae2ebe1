//! Authentication domain
//!
//! Claims, issued token details, and the typed failures of a login attempt.

mod claims;
mod error;
mod token;

pub use claims::{Claims, ROLE_CLAIM, USERNAME_CLAIM};
pub use error::{AuthError, AuthErrorCode};
pub use token::{TokenDetails, TokenDetailsBuilder};
