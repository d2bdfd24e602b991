//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! shopkeep-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//!
//! # Migration Files
//!
//! Stored in `crates/api/migrations/` and embedded into the binary at build
//! time through `shopkeep_api::db::MIGRATOR`.

use secrecy::ExposeSecret;
use sqlx::PgPool;

use shopkeep_api::db::MIGRATOR;

use super::{CommandError, database_url};

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `CommandError` if `DATABASE_URL` is missing, the connection fails,
/// or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!(
        migrations = MIGRATOR.iter().count(),
        "Running migrations..."
    );
    MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
