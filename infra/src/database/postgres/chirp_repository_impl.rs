//! PostgreSQL implementation of the ChirpRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::chirp::Chirp;
use chirpy_core::errors::DomainError;
use chirpy_core::repositories::ChirpRepository;

use super::persistence_error;

const CHIRP_COLUMNS: &str = "id, body, user_id, created_at, updated_at";

/// PostgreSQL implementation of ChirpRepository
pub struct PgChirpRepository {
    pool: PgPool,
}

impl PgChirpRepository {
    /// Create a new PostgreSQL chirp repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_chirp(row: &PgRow) -> Result<Chirp, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::persistence(format!("Failed to get {}: {}", name, e))
        };

        Ok(Chirp {
            id: row.try_get::<Uuid, _>("id").map_err(|e| column("id", e))?,
            body: row.try_get("body").map_err(|e| column("body", e))?,
            user_id: row
                .try_get::<Uuid, _>("user_id")
                .map_err(|e| column("user_id", e))?,
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
impl ChirpRepository for PgChirpRepository {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError> {
        let query = format!(
            "INSERT INTO chirps ({cols}) VALUES ($1, $2, $3, $4, $5) RETURNING {cols}",
            cols = CHIRP_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(chirp.id)
            .bind(&chirp.body)
            .bind(chirp.user_id)
            .bind(chirp.created_at)
            .bind(chirp.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| persistence_error("create chirp", e))?;

        Self::row_to_chirp(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, DomainError> {
        let query = format!("SELECT {} FROM chirps WHERE id = $1", CHIRP_COLUMNS);

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_error("find chirp", e))?
            .as_ref()
            .map(Self::row_to_chirp)
            .transpose()
    }

    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>, DomainError> {
        // A NULL author matches every row
        let query = format!(
            r#"
            SELECT {}
            FROM chirps
            WHERE $1::uuid IS NULL OR user_id = $1
            ORDER BY created_at ASC
            "#,
            CHIRP_COLUMNS
        );

        sqlx::query(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| persistence_error("list chirps", e))?
            .iter()
            .map(Self::row_to_chirp)
            .collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence_error("delete chirp", e))?;

        Ok(result.rows_affected() > 0)
    }
}
