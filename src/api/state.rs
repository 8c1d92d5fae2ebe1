//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::{AuthError, DomainError, TokenDetails};
use crate::infrastructure::auth::{SecurityService, TokenIssuer};
use crate::infrastructure::user::{PasswordHasher, RegisterUserRequest, SeedUser, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub security_service: Arc<dyn SecurityServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
}

/// Login operations
#[async_trait::async_trait]
pub trait SecurityServiceTrait: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<TokenDetails, AuthError>;
}

/// User directory operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;
    async fn seed(&self, users: &[SeedUser]) -> Result<Vec<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R, H, T> SecurityServiceTrait for SecurityService<R, H, T>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenDetails, AuthError> {
        SecurityService::authenticate(self, username, password).await
    }
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn seed(&self, users: &[SeedUser]) -> Result<Vec<User>, DomainError> {
        UserService::seed(self, users).await
    }
}
