//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 3000)
//! - `SERVICE_NAME` - Name reported by the `/` health endpoint (default: shopkeep-api)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_SERVICE_NAME: &str = "shopkeep-api";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text (local development).
    #[default]
    Text,
    /// One JSON object per event (log aggregation).
    Json,
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Service name reported by the root health endpoint
    pub service_name: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., production, staging)
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` is missing or if `HOST`/`PORT`
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;

        let service_name =
            lookup("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty());
        let sentry_environment = lookup("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = lookup("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = lookup("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);

        Ok(Self {
            database_url,
            host,
            port,
            service_name,
            log_format,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/shopkeep")]).unwrap();

        assert_eq!(
            config.database_url.expose_secret(),
            "postgres://localhost/shopkeep"
        );
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_port_and_host_override() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/shopkeep"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_database_url() {
        let err = load(&[("PORT", "8080")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "DATABASE_URL"));

        let err = load(&[("DATABASE_URL", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[
            ("DATABASE_URL", "postgres://localhost/shopkeep"),
            ("PORT", "http"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PORT"));
    }

    #[test]
    fn test_empty_sentry_dsn_is_disabled() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/shopkeep"),
            ("SENTRY_DSN", ""),
        ])
        .unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
