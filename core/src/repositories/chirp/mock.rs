//! Mock implementation of ChirpRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::chirp::Chirp;
use crate::errors::DomainError;

use super::r#trait::ChirpRepository;

/// Mock chirp repository for testing
///
/// Keeps insertion order, which doubles as creation order.
pub struct MockChirpRepository {
    chirps: Arc<RwLock<Vec<Chirp>>>,
}

impl MockChirpRepository {
    pub fn new() -> Self {
        Self {
            chirps: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.chirps.read().await.len()
    }
}

impl Default for MockChirpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChirpRepository for MockChirpRepository {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError> {
        self.chirps.write().await.push(chirp.clone());
        Ok(chirp)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, DomainError> {
        let chirps = self.chirps.read().await;
        Ok(chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>, DomainError> {
        let chirps = self.chirps.read().await;
        Ok(chirps
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
