//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                 - Service banner ({ok, service})
//! GET    /health           - Liveness check
//! GET    /health/ready     - Readiness check (database reachable)
//!
//! # Users
//! POST   /users            - Create user
//! GET    /users            - List users
//!
//! # Stores
//! POST   /stores           - Create store
//! GET    /stores/{id}      - Store with owner and products
//! PUT    /stores/{id}      - Partial update
//! DELETE /stores/{id}      - Delete store (and its products)
//!
//! # Products
//! POST   /products         - Create product
//! GET    /products         - List products with store and owner
//! PUT    /products/{id}    - Partial update
//! DELETE /products/{id}    - Delete product
//! ```

pub mod health;
pub mod products;
pub mod stores;
pub mod users;

use axum::{
    Router,
    routing::{get, post, put},
};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(users::create).get(users::list))
}

/// Create the store routes router.
pub fn store_routes() -> Router<AppState> {
    Router::new().route("/", post(stores::create)).route(
        "/{id}",
        get(stores::show).put(stores::update).delete(stores::delete),
    )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create).get(products::list))
        .route("/{id}", put(products::update).delete(products::delete))
}

/// Build the complete router with all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::banner))
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .nest("/users", user_routes())
        .nest("/stores", store_routes())
        .nest("/products", product_routes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::middleware::REQUEST_ID_HEADER;
    use crate::state::AppState;

    /// Router over a pool that never connects. Only paths that fail before
    /// touching the database may be exercised.
    fn test_app() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://shopkeep@localhost/unused")
            .unwrap();
        crate::app(AppState::with_service_name("shopkeep-test", pool))
    }

    /// Router over a pool aimed at a closed port, failing fast on acquire.
    fn unreachable_db_app() -> axum::Router {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy("postgres://shopkeep@127.0.0.1:1/unused")
            .unwrap();
        crate::app(AppState::with_service_name("shopkeep-test", pool))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_banner() {
        let response = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "ok": true, "service": "shopkeep-test" })
        );
    }

    #[tokio::test]
    async fn test_liveness() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_readiness_without_database_is_503() {
        let response = unreachable_db_app()
            .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_non_numeric_store_id_is_400() {
        let response = test_app()
            .oneshot(Request::get("/stores/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_non_numeric_product_id_on_update_is_400() {
        let response = test_app()
            .oneshot(json_request("PUT", "/products/one", r#"{"name":"x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let response = test_app()
            .oneshot(json_request("POST", "/stores", r#"{"name": "#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_field_is_400() {
        let response = test_app()
            .oneshot(json_request("POST", "/users", r#"{"email":"a@b.c"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_non_numeric_price_is_400() {
        let response = test_app()
            .oneshot(json_request(
                "POST",
                "/products",
                r#"{"name":"Mug","price":"cheap","storeId":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let request = Request::post("/users")
            .body(Body::from(r#"{"email":"a@b.c","name":"A"}"#))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let request = Request::get("/health")
            .header(REQUEST_ID_HEADER, "upstream-123")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).unwrap(),
            "upstream-123"
        );
    }
}
