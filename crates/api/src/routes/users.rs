//! User route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::db::UserRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::User;
use crate::state::AppState;

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

/// Create a user.
///
/// POST /users
///
/// # Errors
///
/// Returns 400 if the body is malformed or the email is already taken.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = UserRepository::new(state.pool())
        .create(&req.email, &req.name)
        .await?;

    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users.
///
/// GET /users
///
/// # Errors
///
/// Returns 400 if the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}
