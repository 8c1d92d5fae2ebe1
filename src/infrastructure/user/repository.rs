//! In-memory user directory

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Users keyed by ID plus a username index, guarded by a single lock
#[derive(Debug, Default)]
struct Directory {
    users: HashMap<UserId, User>,
    /// username -> user ID
    username_index: HashMap<String, UserId>,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    directory: RwLock<Directory>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let directory = self.directory.read().await;

        Ok(directory
            .username_index
            .get(username)
            .and_then(|id| directory.users.get(id))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut directory = self.directory.write().await;

        if directory.users.contains_key(user.id()) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                user.id()
            )));
        }

        if directory.username_index.contains_key(user.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            )));
        }

        directory
            .username_index
            .insert(user.username().to_string(), *user.id());
        directory.users.insert(*user.id(), user.clone());

        Ok(user)
    }
}
