//! Chirp repository trait defining the interface for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::chirp::Chirp;
use crate::errors::DomainError;

/// Repository trait for Chirp entity persistence operations
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Store a new chirp
    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError>;

    /// Find a chirp by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, DomainError>;

    /// List chirps oldest first, optionally only those by `author_id`
    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>, DomainError>;

    /// Delete a chirp
    ///
    /// # Returns
    /// * `Ok(true)` - The chirp was deleted
    /// * `Ok(false)` - No chirp with that id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
