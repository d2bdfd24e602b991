//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when parsing a [`Price`].
#[derive(Debug, Clone, Error)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a number, got {0:?}")]
    NotANumber(String),
}

/// A product price.
///
/// Stored as `NUMERIC` in the database and carried as a [`Decimal`] in between,
/// so no binary floating point touches the stored value. On the wire it is a
/// plain JSON number; clients may also send it as a numeric string.
///
/// ```
/// use shopkeep_core::Price;
///
/// let price: Price = "19.90".parse().unwrap();
/// assert_eq!(price.to_string(), "19.90");
/// assert!("cheap".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self)
            .map_err(|_| PriceError::NotANumber(s.to_owned()))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.collect_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string containing one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Decimal::from_f64(v)
            .map(Price)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        v.parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_json_number() {
        let price: Price = serde_json::from_str("19.9").unwrap();
        assert_eq!(price.amount(), Decimal::new(199, 1));

        let price: Price = serde_json::from_str("5").unwrap();
        assert_eq!(price.amount(), Decimal::from(5));
    }

    #[test]
    fn test_price_from_json_string() {
        let price: Price = serde_json::from_str(r#""12.50""#).unwrap();
        assert_eq!(price.amount(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_price_rejects_non_numeric() {
        assert!(serde_json::from_str::<Price>(r#""free""#).is_err());
        assert!(serde_json::from_str::<Price>("null").is_err());
        assert!(serde_json::from_str::<Price>("[1]").is_err());
    }

    #[test]
    fn test_price_serializes_as_number() {
        let price = Price::new(Decimal::new(1250, 2));
        let value = serde_json::to_value(price).unwrap();
        assert_eq!(value, serde_json::json!(12.5));
    }

    #[test]
    fn test_price_scientific_string() {
        let price: Price = "1e2".parse().unwrap();
        assert_eq!(price.amount(), Decimal::from(100));
    }
}
