//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build a repository already holding `user`
    pub async fn with_existing_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.write().await.insert(user.id, user);
        repo
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::bad_request("email already registered"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == email && u.id != id) {
            return Err(DomainError::bad_request("email already registered"));
        }

        Ok(users.get_mut(&id).map(|user| {
            user.set_credentials(email.to_string(), hashed_password.to_string());
            user.clone()
        }))
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|user| {
            user.upgrade_to_chirpy_red();
            user.clone()
        }))
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let mut users = self.users.write().await;
        let count = users.len() as u64;
        users.clear();
        Ok(count)
    }
}
