//! User repository for database operations.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::User;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, email: &str, name: &str) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (email, name)
            VALUES ($1, $2)
            RETURNING id, email, name, created_at, updated_at
            ",
        )
        .bind(email)
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            RepositoryError::from_write(
                e,
                "a user with this email already exists",
                "referenced record does not exist",
            )
        })
    }

    /// List all users, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(
            r"
            SELECT id, email, name, created_at, updated_at
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}
