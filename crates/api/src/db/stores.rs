//! Store repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shopkeep_core::{StoreId, UserId};

use super::RepositoryError;
use crate::models::{Product, Store, StoreChanges, StoreDetail, StoreWithOwner, User};

const STORE_CONFLICT: &str = "store already exists";
const MISSING_OWNER: &str = "user referenced by this store does not exist";

// =============================================================================
// Internal Row Types
// =============================================================================

/// A store joined with its owning user, owner columns prefixed `owner_`.
#[derive(Debug, sqlx::FromRow)]
struct StoreOwnerRow {
    id: StoreId,
    name: String,
    user_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_email: String,
    owner_name: String,
    owner_created_at: DateTime<Utc>,
    owner_updated_at: DateTime<Utc>,
}

impl From<StoreOwnerRow> for StoreWithOwner {
    fn from(row: StoreOwnerRow) -> Self {
        Self {
            user: User {
                id: row.user_id,
                email: row.owner_email,
                name: row.owner_name,
                created_at: row.owner_created_at,
                updated_at: row.owner_updated_at,
            },
            store: Store {
                id: row.id,
                name: row.name,
                user_id: row.user_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for store database operations.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new store owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the user does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, name: &str, user_id: UserId) -> Result<Store, RepositoryError> {
        sqlx::query_as::<_, Store>(
            r"
            INSERT INTO stores (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id, created_at, updated_at
            ",
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, STORE_CONFLICT, MISSING_OWNER))
    }

    /// Get a store with its owner and all of its products.
    ///
    /// Returns `Ok(None)` if no store has this ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_with_relations(
        &self,
        id: StoreId,
    ) -> Result<Option<StoreDetail>, RepositoryError> {
        let row = sqlx::query_as::<_, StoreOwnerRow>(
            r"
            SELECT s.id, s.name, s.user_id, s.created_at, s.updated_at,
                   u.email AS owner_email,
                   u.name AS owner_name,
                   u.created_at AS owner_created_at,
                   u.updated_at AS owner_updated_at
            FROM stores s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, price, store_id, created_at, updated_at
            FROM products
            WHERE store_id = $1
            ORDER BY id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let StoreWithOwner { store, user } = row.into();
        Ok(Some(StoreDetail {
            store,
            user,
            products,
        }))
    }

    /// Apply a partial update. Fields left as `None` keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no store has this ID.
    /// Returns `RepositoryError::ForeignKey` if the new owner does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: StoreId,
        changes: StoreChanges,
    ) -> Result<Store, RepositoryError> {
        sqlx::query_as::<_, Store>(
            r"
            UPDATE stores
            SET name = COALESCE($2, name),
                user_id = COALESCE($3, user_id),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, user_id, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.user_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, STORE_CONFLICT, MISSING_OWNER))?
        .ok_or(RepositoryError::NotFound("store"))
    }

    /// Delete a store. Its products are removed by the `ON DELETE CASCADE`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no store has this ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: StoreId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("store"));
        }
        Ok(())
    }
}
