//! Shopkeep Core - Shared domain types.
//!
//! This crate provides the types shared by the Shopkeep components:
//! - `api` - REST service over users, stores and products
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP. Database encoding is opt-in through the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for entity IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
