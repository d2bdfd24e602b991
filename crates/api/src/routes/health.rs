//! Health endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct Banner {
    pub ok: bool,
    pub service: String,
}

/// Service banner.
///
/// GET /
pub async fn banner(State(state): State<AppState>) -> Json<Banner> {
    Json(Banner {
        ok: true,
        service: state.service_name().to_owned(),
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn liveness() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
