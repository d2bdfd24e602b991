//! Database operations for the Shopkeep `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `users` - Store owners (unique `email`)
//! - `stores` - Shops, `user_id` references `users`
//! - `products` - Items, `store_id` references `stores`
//!
//! Referential integrity and email uniqueness are enforced by the schema;
//! repositories translate the resulting constraint violations into
//! [`RepositoryError`] variants instead of checking beforehand.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p shopkeep-cli -- migrate
//! ```

pub mod products;
pub mod stores;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use products::ProductRepository;
pub use stores::StoreRepository;
pub use users::UserRepository;

/// SQLSTATE class for data exceptions (overflow, invalid text representation).
const DATA_EXCEPTION_CLASS: &str = "22";

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update or delete matched no row.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unique constraint violation (e.g., duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// A referenced user or store does not exist.
    #[error("{0}")]
    ForeignKey(String),

    /// The database rejected a supplied value (SQLSTATE class `22`), e.g. a
    /// price too large for its column.
    #[error("{0}")]
    InvalidValue(String),
}

impl RepositoryError {
    /// Classify an error returned by an `INSERT` or `UPDATE`.
    ///
    /// `conflict` and `missing_parent` are the messages reported for unique and
    /// foreign key violations respectively. Data exceptions keep the server's
    /// own message.
    fn from_write(err: sqlx::Error, conflict: &str, missing_parent: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::Conflict(conflict.to_owned());
            }
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKey(missing_parent.to_owned());
            }
            if db_err.code().is_some_and(|code| code.starts_with(DATA_EXCEPTION_CLASS)) {
                return Self::InvalidValue(db_err.message().to_owned());
            }
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    /// Server-side error carrying only a SQLSTATE and message.
    #[derive(Debug)]
    struct PgFailure {
        code: &'static str,
        message: &'static str,
    }

    impl fmt::Display for PgFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl std::error::Error for PgFailure {}

    impl DatabaseError for PgFailure {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                "23503" => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn classify(code: &'static str, message: &'static str) -> RepositoryError {
        let err = sqlx::Error::Database(Box::new(PgFailure { code, message }));
        RepositoryError::from_write(err, "dup", "missing")
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RepositoryError::NotFound("store").to_string(), "store not found");
        assert_eq!(
            RepositoryError::ForeignKey("user does not exist".to_string()).to_string(),
            "user does not exist"
        );
    }

    #[test]
    fn test_non_database_errors_stay_database_errors() {
        let err = RepositoryError::from_write(sqlx::Error::RowNotFound, "dup", "missing");
        assert!(matches!(err, RepositoryError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_constraint_violations() {
        assert!(matches!(
            classify("23505", "duplicate key value"),
            RepositoryError::Conflict(ref msg) if msg == "dup"
        ));
        assert!(matches!(
            classify("23503", "violates foreign key constraint"),
            RepositoryError::ForeignKey(ref msg) if msg == "missing"
        ));
    }

    #[test]
    fn test_data_exceptions_are_invalid_values() {
        let err = classify("22003", "numeric field overflow");
        assert!(matches!(err, RepositoryError::InvalidValue(_)));
        assert_eq!(err.to_string(), "numeric field overflow");
    }

    #[test]
    fn test_other_server_errors_stay_database_errors() {
        let err = classify("40001", "could not serialize access");
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
