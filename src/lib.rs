//! Auth Token Service
//!
//! Verifies username/password credentials and issues signed, time-bounded
//! access tokens:
//! - Credential checks against a user directory (unknown user, disabled
//!   account, wrong password)
//! - HS256 JWTs with issuer, subject, unique ID, issued-at and expiration
//! - Argon2 password hashing
//! - HTTP login/registration endpoints and a CLI

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::{AppState, UserServiceTrait};
use config::SeedUserConfig;
use infrastructure::auth::{JwtTokenIssuer, SecurityService};
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, SeedUser, UserService};

/// Wire the in-memory directory, Argon2 hasher and JWT issuer, then seed
/// configured users
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let issuer = Arc::new(JwtTokenIssuer::new(config.jwt.to_jwt_config())?);
    info!(
        issuer = %issuer.issuer(),
        expiration_seconds = config.jwt.expiration,
        "Token issuer configured"
    );

    let repository = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(Argon2Hasher::new());

    let user_service = Arc::new(UserService::new(repository.clone(), hasher.clone()));
    seed_users(user_service.as_ref(), &config.users).await?;

    let security_service = Arc::new(SecurityService::new(repository, hasher, issuer));

    Ok(AppState {
        security_service,
        user_service,
    })
}

async fn seed_users(
    user_service: &dyn UserServiceTrait,
    users: &[SeedUserConfig],
) -> anyhow::Result<()> {
    if users.is_empty() {
        warn!("No users configured; only registered users will be able to log in");
        return Ok(());
    }

    let seeds: Vec<SeedUser> = users.iter().map(SeedUser::from).collect();
    let created = user_service.seed(&seeds).await?;
    info!(
        configured = seeds.len(),
        created = created.len(),
        "Seeded configured users"
    );

    Ok(())
}
