//! Domain types returned by the repositories and rendered as JSON.
//!
//! Field names serialize in camelCase (`userId`, `createdAt`).

pub mod product;
pub mod store;
pub mod user;

pub use product::{Product, ProductChanges, ProductListing};
pub use store::{Store, StoreChanges, StoreDetail, StoreWithOwner};
pub use user::User;
