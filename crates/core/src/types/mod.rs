//! Core types for Shopkeep.
//!
//! Both IDs and prices accept the loose JSON clients send: a number or a
//! numeric string.

pub mod id;
pub mod price;

pub use id::*;
pub use price::{Price, PriceError};
