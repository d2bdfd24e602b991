//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds the one connection
/// pool every handler queries through.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service_name: String,
    pool: PgPool,
}

impl AppState {
    /// Create application state from loaded configuration.
    #[must_use]
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self::with_service_name(config.service_name.clone(), pool)
    }

    /// Create application state without a full configuration (tests, tooling).
    #[must_use]
    pub fn with_service_name(service_name: impl Into<String>, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                service_name: service_name.into(),
                pool,
            }),
        }
    }

    /// Name reported by the root health endpoint.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.inner.service_name
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}
