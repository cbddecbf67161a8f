//! Chirp entity: a short text post owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted chirp body, in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words masked out of chirp bodies (matched case-insensitively)
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement for a masked word
pub const PROFANITY_MASK: &str = "****";

/// Chirp entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    /// Unique identifier for the chirp
    pub id: Uuid,

    /// Cleaned post body
    pub body: String,

    /// Author of the chirp
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chirp {
    /// Creates a new chirp; the body is stored as given
    pub fn new(body: String, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            body,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` wrote this chirp
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Ordering of a chirp listing by creation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse the `sort` query value; anything but `desc` sorts ascending
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}
