//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopkeep_core::UserId;

/// A user who may own stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Email address, unique across users.
    pub email: String,
    /// Display name.
    pub name: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
