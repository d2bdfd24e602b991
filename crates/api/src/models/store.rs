//! Store domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopkeep_core::{StoreId, UserId};

use super::{Product, User};

/// A shop owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    /// Owning user.
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A store together with its owner and its products.
///
/// Serializes as the store's own fields plus `user` and `products`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreDetail {
    #[serde(flatten)]
    pub store: Store,
    pub user: User,
    pub products: Vec<Product>,
}

/// A store together with its owner.
#[derive(Debug, Clone, Serialize)]
pub struct StoreWithOwner {
    #[serde(flatten)]
    pub store: Store,
    pub user: User,
}

/// Partial update of a store. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct StoreChanges {
    pub name: Option<String>,
    pub user_id: Option<UserId>,
}
