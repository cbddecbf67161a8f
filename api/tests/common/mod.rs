//! Shared fixtures for the API integration tests
//!
//! In-memory repositories and an app factory wired the same way as the
//! binary, minus PostgreSQL.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use chirpy_api::AppState;
use chirpy_core::domain::entities::{Chirp, RefreshToken, User};
use chirpy_core::errors::DomainError;
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};
use chirpy_core::services::{
    auth::{AuthService, AuthServiceConfig},
    chirp::ChirpService,
    password::PasswordHasher,
    token::{TokenService, TokenServiceConfig},
};
use chirpy_shared::config::Platform;

pub const JWT_SECRET: &str = "integration-secret";
pub const POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

#[derive(Default)]
pub struct InMemoryUsers {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUsers {
    pub async fn get(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::bad_request("email already registered"));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.get(id).await)
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
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

#[derive(Default)]
pub struct InMemoryTokens {
    tokens: RwLock<HashMap<String, RefreshToken>>,
}

#[async_trait]
impl TokenRepository for InMemoryTokens {
    async fn insert_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        self.tokens
            .write()
            .await
            .insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_active_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        Ok(self
            .tokens
            .read()
            .await
            .get(token)
            .filter(|t| t.is_active())
            .cloned())
    }

    async fn mark_refresh_token_revoked(&self, token: &str) -> Result<(), DomainError> {
        if let Some(record) = self.tokens.write().await.get_mut(token) {
            record.revoke();
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryChirps {
    chirps: RwLock<Vec<Chirp>>,
}

impl InMemoryChirps {
    pub async fn len(&self) -> usize {
        self.chirps.read().await.len()
    }
}

#[async_trait]
impl ChirpRepository for InMemoryChirps {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError> {
        self.chirps.write().await.push(chirp.clone());
        Ok(chirp)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, DomainError> {
        Ok(self.chirps.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>, DomainError> {
        Ok(self
            .chirps
            .read()
            .await
            .iter()
            .filter(|c| author_id.map_or(true, |author| c.user_id == author))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut chirps = self.chirps.write().await;
        let before = chirps.len();
        chirps.retain(|c| c.id != id);
        Ok(chirps.len() < before)
    }
}

pub type TestState = AppState<InMemoryUsers, InMemoryTokens>;

pub struct TestContext {
    pub users: Arc<InMemoryUsers>,
    pub chirp_store: Arc<InMemoryChirps>,
    pub state: web::Data<TestState>,
    pub chirps: web::Data<ChirpService<InMemoryChirps>>,
}

pub fn context(platform: Platform) -> TestContext {
    let users = Arc::new(InMemoryUsers::default());
    let token_service = Arc::new(TokenService::new(
        InMemoryTokens::default(),
        TokenServiceConfig::new(JWT_SECRET),
    ));
    let auth_service = AuthService::new(
        users.clone(),
        token_service,
        AuthServiceConfig::new(POLKA_KEY),
    )
    .with_hasher(PasswordHasher::with_params(1024, 1, 1).expect("valid params"));

    let chirp_store = Arc::new(InMemoryChirps::default());

    TestContext {
        users,
        chirp_store: chirp_store.clone(),
        state: web::Data::new(AppState::new(Arc::new(auth_service), platform)),
        chirps: web::Data::new(ChirpService::new(chirp_store)),
    }
}
