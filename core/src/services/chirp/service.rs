//! Chirp service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::chirp::{
    Chirp, SortDirection, MAX_CHIRP_LENGTH, PROFANE_WORDS, PROFANITY_MASK,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ChirpRepository;

const CHIRP_NOT_FOUND: &str = "Chirp not found";
const NOT_THE_AUTHOR: &str = "You can only delete your own chirps";

/// Validate a chirp body and mask profane words
///
/// Words are split on single spaces and compared case-insensitively, so
/// punctuation attached to a word keeps it from matching.
///
/// # Errors
///
/// * `BadRequest` - The body is longer than [`MAX_CHIRP_LENGTH`] characters
pub fn clean_chirp_body(body: &str) -> DomainResult<String> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(DomainError::bad_request(format!(
            "Chirp is too long. Max length is {}",
            MAX_CHIRP_LENGTH
        )));
    }

    let cleaned = body
        .split(' ')
        .map(|word| {
            if PROFANE_WORDS.contains(&word.to_lowercase().as_str()) {
                PROFANITY_MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Ok(cleaned)
}

/// Parse a chirp id taken from the request path
pub fn parse_chirp_id(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DomainError::bad_request("Invalid chirp ID"))
}

/// Parse the optional `authorId` filter; an empty value means no filter
pub fn parse_author_id(raw: Option<&str>) -> DomainResult<Option<Uuid>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => Uuid::parse_str(value)
            .map(Some)
            .map_err(|_| DomainError::bad_request("Invalid author ID")),
    }
}

/// Service for short text posts
pub struct ChirpService<C>
where
    C: ChirpRepository,
{
    repository: Arc<C>,
}

impl<C> ChirpService<C>
where
    C: ChirpRepository,
{
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Post a chirp on behalf of an authenticated user
    pub async fn create(&self, author_id: Uuid, body: &str) -> DomainResult<Chirp> {
        let cleaned = clean_chirp_body(body)?;
        let chirp = self.repository.create(Chirp::new(cleaned, author_id)).await?;

        tracing::info!(chirp_id = %chirp.id, user_id = %author_id, "chirp created");
        Ok(chirp)
    }

    /// List chirps by creation time, optionally filtered by author
    pub async fn list(
        &self,
        author_id: Option<Uuid>,
        sort: SortDirection,
    ) -> DomainResult<Vec<Chirp>> {
        let mut chirps = self.repository.list(author_id).await?;

        match sort {
            SortDirection::Asc => chirps.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortDirection::Desc => chirps.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(chirps)
    }

    /// Fetch a single chirp
    ///
    /// # Errors
    ///
    /// * `NotFound("Chirp not found")` - No chirp with that id
    pub async fn get(&self, id: Uuid) -> DomainResult<Chirp> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(CHIRP_NOT_FOUND))
    }

    /// Delete a chirp; only its author may do so
    ///
    /// # Errors
    ///
    /// * `NotFound("Chirp not found")` - No chirp with that id
    /// * `Forbidden("You can only delete your own chirps")` - Caller is not the author
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DomainResult<()> {
        let chirp = self.get(id).await?;

        if !chirp.is_authored_by(user_id) {
            tracing::warn!(chirp_id = %id, %user_id, "chirp delete refused: not the author");
            return Err(DomainError::forbidden(NOT_THE_AUTHOR));
        }

        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(CHIRP_NOT_FOUND));
        }

        tracing::info!(chirp_id = %id, %user_id, "chirp deleted");
        Ok(())
    }
}
