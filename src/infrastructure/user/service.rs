//! User directory service: registration and startup seeding

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_password, validate_username, User, UserId, UserRepository, UserRole,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new, enabled user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

impl RegisterUserRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

/// A user provisioned at startup
#[derive(Clone)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub enabled: bool,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("role", &self.role)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// User service over a repository and a password hasher
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Validate, hash and store a new enabled user
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        self.create_user(&request.username, &request.password, request.role, true)
            .await
    }

    /// Register configured users, skipping usernames that already exist
    ///
    /// Returns the users that were created. Within one call the first entry
    /// for a username wins.
    pub async fn seed(&self, users: &[SeedUser]) -> Result<Vec<User>, DomainError> {
        let mut created = Vec::with_capacity(users.len());

        for seed in users {
            if self.repository.username_exists(&seed.username).await? {
                debug!(username = %seed.username, "User already present, skipping");
                continue;
            }

            let user = self
                .create_user(&seed.username, &seed.password, seed.role, seed.enabled)
                .await?;
            created.push(user);
        }

        Ok(created)
    }

    async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
        enabled: bool,
    ) -> Result<User, DomainError> {
        validate_username(username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.username_exists(username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                username
            )));
        }

        let password_hash = self.hasher.hash(password)?;

        let mut user = User::new(UserId::generate(), username, password_hash, role);
        if !enabled {
            user.disable();
        }

        let user = self.repository.create(user).await?;
        info!(
            user_id = %user.id(),
            username = %user.username(),
            role = %user.role(),
            enabled = user.is_enabled(),
            "User created"
        );

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> (
        UserService<InMemoryUserRepository, Argon2Hasher>,
        Arc<InMemoryUserRepository>,
    ) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repository.clone(), Arc::new(Argon2Hasher::new()));
        (service, repository)
    }

    fn seed_user(username: &str, password: &str, role: UserRole, enabled: bool) -> SeedUser {
        SeedUser {
            username: username.to_string(),
            password: password.to_string(),
            role,
            enabled,
        }
    }

    #[tokio::test]
    async fn test_register_user() {
        let (service, _) = create_service();

        let user = service
            .register(RegisterUserRequest::new("alice", "secret123", UserRole::User))
            .await
            .unwrap();

        assert_eq!(user.username(), "alice");
        assert_eq!(user.role(), UserRole::User);
        assert!(user.is_enabled());
        assert_ne!(user.password_hash(), "secret123");
        assert!(Argon2Hasher::new().matches("secret123", user.password_hash()));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let (service, _) = create_service();

        let short_name = service
            .register(RegisterUserRequest::new("al", "secret123", UserRole::User))
            .await;
        assert!(matches!(short_name, Err(DomainError::Validation { .. })));

        let short_password = service
            .register(RegisterUserRequest::new("alice", "short", UserRole::User))
            .await;
        assert!(matches!(short_password, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let (service, _) = create_service();

        service
            .register(RegisterUserRequest::new("alice", "secret123", UserRole::User))
            .await
            .unwrap();

        let result = service
            .register(RegisterUserRequest::new("alice", "other-secret", UserRole::Admin))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_seed_disables_and_skips_existing() {
        let (service, repository) = create_service();

        service
            .register(RegisterUserRequest::new("alice", "secret123", UserRole::User))
            .await
            .unwrap();

        let created = service
            .seed(&[
                seed_user("alice", "different-pass", UserRole::Admin, true),
                seed_user("bob", "hunter2hunter2", UserRole::Admin, false),
                seed_user("bob", "another-pass", UserRole::User, true),
            ])
            .await
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].username(), "bob");

        let alice = repository.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(alice.role(), UserRole::User);
        assert!(Argon2Hasher::new().matches("secret123", alice.password_hash()));

        let bob = repository.get_by_username("bob").await.unwrap().unwrap();
        assert_eq!(bob.role(), UserRole::Admin);
        assert!(!bob.is_enabled());
        assert!(Argon2Hasher::new().matches("hunter2hunter2", bob.password_hash()));
    }

    #[tokio::test]
    async fn test_seed_validates_entries() {
        let (service, _) = create_service();

        let result = service
            .seed(&[seed_user("x", "secret123", UserRole::User, true)])
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_seed_user_debug_hides_password() {
        let seed = seed_user("alice", "do-not-print", UserRole::User, true);
        assert!(!format!("{:?}", seed).contains("do-not-print"));
    }
}
