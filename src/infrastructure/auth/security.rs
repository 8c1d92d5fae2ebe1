//! Credential verification and token issuance for a login attempt

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::auth::{AuthError, Claims, TokenDetails, ROLE_CLAIM, USERNAME_CLAIM};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::PasswordHasher;

use super::jwt::TokenIssuer;

/// Verifies credentials against the user directory and issues tokens
#[derive(Debug)]
pub struct SecurityService<R: UserRepository, H: PasswordHasher, T: TokenIssuer> {
    users: Arc<R>,
    hasher: Arc<H>,
    issuer: Arc<T>,
}

impl<R: UserRepository, H: PasswordHasher, T: TokenIssuer> SecurityService<R, H, T> {
    pub fn new(users: Arc<R>, hasher: Arc<H>, issuer: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            issuer,
        }
    }

    /// Authenticate by username and password and issue a token for the user
    ///
    /// Checks run in a fixed order: unknown username, disabled account, then
    /// password. A disabled account is reported as such even when the
    /// password is wrong. Directory and signing faults are returned as
    /// [`AuthError::Infrastructure`] without a code.
    #[instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenDetails, AuthError> {
        let Some(user) = self.users.get_by_username(username).await? else {
            warn!("Login rejected: unknown username");
            return Err(AuthError::InvalidUsername);
        };

        if !user.is_enabled() {
            warn!(user_id = %user.id(), "Login rejected: account disabled");
            return Err(AuthError::AccountDisabled);
        }

        if !self.hasher.matches(password, user.password_hash()) {
            warn!(user_id = %user.id(), "Login rejected: invalid password");
            return Err(AuthError::InvalidPassword);
        }

        let details = self.generate_token(&user)?;
        let details = details.to_builder().user_id(*user.id()).build()?;

        info!(
            user_id = %user.id(),
            expires_at = %details.expires_at(),
            "Access token issued"
        );

        Ok(details)
    }

    fn generate_token(&self, user: &User) -> Result<TokenDetails, DomainError> {
        let claims = Claims::new()
            .with(ROLE_CLAIM, user.role().as_str())
            .with(USERNAME_CLAIM, user.username());

        self.issuer.generate(claims, &user.id().to_string())
    }
}
