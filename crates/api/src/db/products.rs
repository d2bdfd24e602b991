//! Product repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shopkeep_core::{Price, ProductId, StoreId, UserId};

use super::RepositoryError;
use crate::models::{Product, ProductChanges, ProductListing, Store, StoreWithOwner, User};

const PRODUCT_CONFLICT: &str = "product already exists";
const MISSING_STORE: &str = "store referenced by this product does not exist";

// =============================================================================
// Internal Row Types
// =============================================================================

/// A product joined with its store (`store_` prefix) and the store's owner
/// (`owner_` prefix).
#[derive(Debug, sqlx::FromRow)]
struct ProductListingRow {
    id: ProductId,
    name: String,
    price: Price,
    store_id: StoreId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    store_name: String,
    store_user_id: UserId,
    store_created_at: DateTime<Utc>,
    store_updated_at: DateTime<Utc>,
    owner_email: String,
    owner_name: String,
    owner_created_at: DateTime<Utc>,
    owner_updated_at: DateTime<Utc>,
}

impl From<ProductListingRow> for ProductListing {
    fn from(row: ProductListingRow) -> Self {
        Self {
            product: Product {
                id: row.id,
                name: row.name,
                price: row.price,
                store_id: row.store_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            store: StoreWithOwner {
                store: Store {
                    id: row.store_id,
                    name: row.store_name,
                    user_id: row.store_user_id,
                    created_at: row.store_created_at,
                    updated_at: row.store_updated_at,
                },
                user: User {
                    id: row.store_user_id,
                    email: row.owner_email,
                    name: row.owner_name,
                    created_at: row.owner_created_at,
                    updated_at: row.owner_updated_at,
                },
            },
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product sold by `store_id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the store does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        price: Price,
        store_id: StoreId,
    ) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (name, price, store_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, store_id, created_at, updated_at
            ",
        )
        .bind(name)
        .bind(price)
        .bind(store_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, PRODUCT_CONFLICT, MISSING_STORE))
    }

    /// List every product with its store and the store's owner, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_store(&self) -> Result<Vec<ProductListing>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductListingRow>(
            r"
            SELECT p.id, p.name, p.price, p.store_id, p.created_at, p.updated_at,
                   s.name AS store_name,
                   s.user_id AS store_user_id,
                   s.created_at AS store_created_at,
                   s.updated_at AS store_updated_at,
                   u.email AS owner_email,
                   u.name AS owner_name,
                   u.created_at AS owner_created_at,
                   u.updated_at AS owner_updated_at
            FROM products p
            JOIN stores s ON s.id = p.store_id
            JOIN users u ON u.id = s.user_id
            ORDER BY p.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Apply a partial update. Fields left as `None` keep their current value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::ForeignKey` if the new store does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                store_id = COALESCE($4, store_id),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, price, store_id, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.price)
        .bind(changes.store_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, PRODUCT_CONFLICT, MISSING_STORE))?
        .ok_or(RepositoryError::NotFound("product"))
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("product"));
        }
        Ok(())
    }
}
