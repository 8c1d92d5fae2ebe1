//! Authentication infrastructure module
//!
//! HS256 token issuance and the login flow that verifies credentials before
//! issuing a token.

mod jwt;
mod security;

pub use jwt::{JwtClaims, JwtConfig, JwtTokenIssuer, TokenIssuer};
pub use security::SecurityService;
