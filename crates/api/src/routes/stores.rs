//! Store route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use shopkeep_core::{StoreId, UserId};

use super::MessageBody;
use crate::db::StoreRepository;
use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Store, StoreChanges, StoreDetail};
use crate::state::AppState;

/// Body of `POST /stores`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreRequest {
    pub name: String,
    pub user_id: UserId,
}

/// Body of `PUT /stores/{id}`. Omitted or `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl From<UpdateStoreRequest> for StoreChanges {
    fn from(req: UpdateStoreRequest) -> Self {
        Self {
            name: req.name,
            user_id: req.user_id,
        }
    }
}

/// Create a store.
///
/// POST /stores
///
/// # Errors
///
/// Returns 400 if the body is malformed or the owning user does not exist.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateStoreRequest>,
) -> Result<(StatusCode, Json<Store>)> {
    let store = StoreRepository::new(state.pool())
        .create(&req.name, req.user_id)
        .await?;

    tracing::info!(store_id = %store.id, user_id = %store.user_id, "Store created");
    Ok((StatusCode::CREATED, Json(store)))
}

/// Get a store with its owner and products.
///
/// GET /stores/{id}
///
/// # Errors
///
/// Returns 404 if the store does not exist, 400 if the id is not numeric.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<StoreDetail>> {
    StoreRepository::new(state.pool())
        .get_with_relations(StoreId::new(id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Store not found".to_string()))
}

/// Update a store's name and/or owner.
///
/// PUT /stores/{id}
///
/// # Errors
///
/// Returns 400 if the store or the new owner does not exist.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateStoreRequest>,
) -> Result<Json<Store>> {
    let store = StoreRepository::new(state.pool())
        .update(StoreId::new(id), req.into())
        .await?;
    Ok(Json(store))
}

/// Delete a store and, by cascade, its products.
///
/// DELETE /stores/{id}
///
/// # Errors
///
/// Returns 400 if the store does not exist.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageBody>> {
    StoreRepository::new(state.pool()).delete(StoreId::new(id)).await?;

    tracing::info!(store_id = %id, "Store deleted");
    Ok(Json(MessageBody {
        message: "Store deleted",
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_coerces_string_user_id() {
        let req: CreateStoreRequest =
            serde_json::from_str(r#"{"name":"Corner Shop","userId":"4"}"#).unwrap();
        assert_eq!(req.user_id, UserId::new(4));
    }

    #[test]
    fn test_update_request_omitted_fields_are_none() {
        let req: UpdateStoreRequest = serde_json::from_str(r#"{"name":"Renamed"}"#).unwrap();
        let changes = StoreChanges::from(req);
        assert_eq!(changes.name.as_deref(), Some("Renamed"));
        assert!(changes.user_id.is_none());

        let req: UpdateStoreRequest = serde_json::from_str(r#"{"userId":null}"#).unwrap();
        assert!(req.user_id.is_none());
    }
}
