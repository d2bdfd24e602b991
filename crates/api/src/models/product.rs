//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopkeep_core::{Price, ProductId, StoreId};

use super::StoreWithOwner;

/// An item sold by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Store selling this product.
    pub store_id: StoreId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product with its store and the store's owner, as listed by `GET /products`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListing {
    #[serde(flatten)]
    pub product: Product,
    pub store: StoreWithOwner,
}

/// Partial update of a product. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub store_id: Option<StoreId>,
}
