//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository for testing
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
    fail_writes: AtomicBool,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Create a repository whose writes always fail
    pub fn failing() -> Self {
        let repo = Self::new();
        repo.fail_writes.store(true, Ordering::SeqCst);
        repo
    }

    /// Raw record lookup, ignoring revocation and expiry
    pub async fn get(&self, token: &str) -> Option<RefreshToken> {
        self.tokens.read().await.get(token).cloned()
    }

    /// Insert a record as-is, bypassing the failure switch
    pub async fn seed(&self, token: RefreshToken) {
        self.tokens.write().await.insert(token.token.clone(), token);
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("connection reset by peer"));
        }
        Ok(())
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn insert_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        self.check_writable()?;
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token) {
            return Err(DomainError::persistence("duplicate refresh token"));
        }

        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_active_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).filter(|t| t.is_active()).cloned())
    }

    async fn mark_refresh_token_revoked(&self, token: &str) -> Result<(), DomainError> {
        self.check_writable()?;
        let mut tokens = self.tokens.write().await;

        if let Some(record) = tokens.get_mut(token) {
            record.revoke();
        }
        Ok(())
    }
}
