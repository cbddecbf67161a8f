//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::user::User;
use chirpy_core::errors::DomainError;
use chirpy_core::repositories::UserRepository;

use super::persistence_error;

const USER_COLUMNS: &str = "id, email, hashed_password, is_chirpy_red, created_at, updated_at";

const EMAIL_TAKEN: &str = "email already registered";

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::persistence(format!("Failed to get {}: {}", name, e))
        };

        Ok(User {
            id: row.try_get::<Uuid, _>("id").map_err(|e| column("id", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(|e| column("hashed_password", e))?,
            is_chirpy_red: row
                .try_get("is_chirpy_red")
                .map_err(|e| column("is_chirpy_red", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }

    /// Map a write error, turning a unique-email violation into a bad request
    fn write_error(operation: &str, error: sqlx::Error) -> DomainError {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::bad_request(EMAIL_TAKEN)
            }
            _ => persistence_error(operation, error),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            "INSERT INTO users ({cols}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {cols}",
            cols = USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.hashed_password)
            .bind(user.is_chirpy_red)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::write_error("create user", e))?;

        Self::row_to_user(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = $1 LIMIT 1", USER_COLUMNS);

        sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_error("find user by email", e))?
            .as_ref()
            .map(Self::row_to_user)
            .transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = $1 LIMIT 1", USER_COLUMNS);

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_error("find user by id", e))?
            .as_ref()
            .map(Self::row_to_user)
            .transpose()
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            UPDATE users
            SET email = $2, hashed_password = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query(&query)
            .bind(id)
            .bind(email)
            .bind(hashed_password)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::write_error("update user credentials", e))?
            .as_ref()
            .map(Self::row_to_user)
            .transpose()
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!(
            r#"
            UPDATE users
            SET is_chirpy_red = TRUE, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_error("upgrade user", e))?
            .as_ref()
            .map(Self::row_to_user)
            .transpose()
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| persistence_error("delete users", e))?;

        Ok(result.rows_affected())
    }
}
