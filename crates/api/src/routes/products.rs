//! Product route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use shopkeep_core::{Price, ProductId, StoreId};

use super::MessageBody;
use crate::db::ProductRepository;
use crate::error::Result;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Product, ProductChanges, ProductListing};
use crate::state::AppState;

/// Body of `POST /products`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Price,
    pub store_id: StoreId,
}

/// Body of `PUT /products/{id}`. Omitted or `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub store_id: Option<StoreId>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            store_id: req.store_id,
        }
    }
}

/// Create a product.
///
/// POST /products
///
/// # Errors
///
/// Returns 400 if the body is malformed or the store does not exist.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = ProductRepository::new(state.pool())
        .create(&req.name, req.price, req.store_id)
        .await?;

    tracing::info!(product_id = %product.id, store_id = %product.store_id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products with their store and the store's owner.
///
/// GET /products
///
/// # Errors
///
/// Returns 400 if the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductListing>>> {
    let products = ProductRepository::new(state.pool())
        .list_with_store()
        .await?;
    Ok(Json(products))
}

/// Update a product's name, price and/or store.
///
/// PUT /products/{id}
///
/// # Errors
///
/// Returns 400 if the product or the new store does not exist.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateProductRequest>,
) -> Result<Json<Product>> {
    let product = ProductRepository::new(state.pool())
        .update(ProductId::new(id), req.into())
        .await?;
    Ok(Json(product))
}

/// Delete a product.
///
/// DELETE /products/{id}
///
/// # Errors
///
/// Returns 400 if the product does not exist.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<MessageBody>> {
    ProductRepository::new(state.pool()).delete(ProductId::new(id)).await?;

    tracing::info!(product_id = %id, "Product deleted");
    Ok(Json(MessageBody {
        message: "Product deleted",
    }))
}
