//! User entity as seen by the auth core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login email, unique across users
    pub email: String,

    /// Self-salted password hash (PHC string)
    #[serde(default, skip_serializing)]
    pub hashed_password: String,

    /// Whether the account has been upgraded through the payment webhook
    pub is_chirpy_red: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(email: String, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            hashed_password,
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the login credentials
    pub fn set_credentials(&mut self, email: String, hashed_password: String) {
        self.email = email;
        self.hashed_password = hashed_password;
        self.updated_at = Utc::now();
    }

    /// Marks the account as upgraded
    pub fn upgrade_to_chirpy_red(&mut self) {
        self.is_chirpy_red = true;
        self.updated_at = Utc::now();
    }
}
