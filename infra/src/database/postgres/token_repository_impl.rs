//! PostgreSQL implementation of the TokenRepository trait.
//!
//! Refresh tokens are addressed by their value. The active-token predicate
//! (unrevoked and unexpired) is evaluated by the database in the lookup query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::token::RefreshToken;
use chirpy_core::errors::DomainError;
use chirpy_core::repositories::TokenRepository;

use super::persistence_error;

/// PostgreSQL implementation of TokenRepository
pub struct PgTokenRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new PostgreSQL token repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &PgRow) -> Result<RefreshToken, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::persistence(format!("Failed to get {}: {}", name, e))
        };

        Ok(RefreshToken {
            token: row.try_get("token").map_err(|e| column("token", e))?,
            user_id: row
                .try_get::<Uuid, _>("user_id")
                .map_err(|e| column("user_id", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| column("expires_at", e))?,
            revoked_at: row
                .try_get::<Option<DateTime<Utc>>, _>("revoked_at")
                .map_err(|e| column("revoked_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn insert_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                token, user_id, expires_at, revoked_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(token.user_id)
            .bind(token.expires_at)
            .bind(token.revoked_at)
            .bind(token.created_at)
            .bind(token.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence_error("save refresh token", e))?;

        Ok(token)
    }

    async fn find_active_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT rt.token, rt.user_id, rt.expires_at, rt.revoked_at,
                   rt.created_at, rt.updated_at
            FROM refresh_tokens rt
            INNER JOIN users u ON u.id = rt.user_id
            WHERE rt.token = $1
              AND rt.revoked_at IS NULL
              AND rt.expires_at > NOW()
            LIMIT 1
        "#;

        sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_error("find refresh token", e))?
            .as_ref()
            .map(Self::row_to_token)
            .transpose()
    }

    async fn mark_refresh_token_revoked(&self, token: &str) -> Result<(), DomainError> {
        let query = r#"
            UPDATE refresh_tokens
            SET revoked_at = COALESCE(revoked_at, NOW()), updated_at = NOW()
            WHERE token = $1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence_error("revoke refresh token", e))?;

        tracing::debug!(rows = result.rows_affected(), "refresh token revoke applied");
        Ok(())
    }
}
