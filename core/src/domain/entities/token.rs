//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer stamped into and required from every access token
pub const TOKEN_ISSUER: &str = "chirpy";

/// Default access token lifetime (1 hour); callers pass the TTL explicitly
pub const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 3600;

/// Refresh token lifetime (60 days), enforced at issuance
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 60;

/// Random bytes behind a refresh token (64 hex characters once encoded)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims structure for the access token payload
///
/// `iss` and `sub` default to empty when absent so that verification can
/// report "invalid issuer" and "no subject" instead of a generic decode
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    #[serde(default)]
    pub iss: String,

    /// Subject (user ID)
    #[serde(default)]
    pub sub: String,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `ttl_seconds` - Lifetime from now, in seconds
    pub fn new_access_token(user_id: Uuid, ttl_seconds: i64) -> Self {
        let issued_at = Utc::now().timestamp();

        Self {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at + ttl_seconds,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Refresh token record owned by the persistence layer
///
/// Addressed by its opaque `token` value. Records are never deleted by the
/// core; revocation only stamps `revoked_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Opaque token value (64 lowercase hex characters)
    pub token: String,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was revoked, if ever
    pub revoked_at: Option<DateTime<Utc>>,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last change to the record
    pub updated_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record expiring after the standard lifetime
    pub fn new(token: String, user_id: Uuid) -> Self {
        Self::with_expiry_days(token, user_id, REFRESH_TOKEN_EXPIRY_DAYS)
    }

    /// Creates a new refresh token record with an explicit lifetime in days
    pub fn with_expiry_days(token: String, user_id: Uuid, days: i64) -> Self {
        let now = Utc::now();

        Self {
            token,
            user_id,
            expires_at: now + Duration::days(days),
            revoked_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the refresh token has expired
    ///
    /// A token is usable only while the current time is strictly before
    /// `expires_at`.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Checks if the refresh token has been revoked
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Checks if the refresh token may be used to mint access tokens
    pub fn is_active(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }

    /// Revokes the refresh token
    ///
    /// The first revocation time is kept; later calls only bump `updated_at`.
    pub fn revoke(&mut self) {
        let now = Utc::now();
        if self.revoked_at.is_none() {
            self.revoked_at = Some(now);
        }
        self.updated_at = now;
    }
}
