//! Integration tests for Shopkeep.
//!
//! # Running Tests
//!
//! The database-backed tests are ignored by default. Point `DATABASE_URL` at
//! a `PostgreSQL` server whose user may create databases, then:
//!
//! ```bash
//! cargo test -p shopkeep-integration-tests -- --ignored
//! ```
//!
//! `#[sqlx::test]` creates a fresh database per test and applies the API's
//! migrations to it.
//!
//! # Test Categories
//!
//! - `api_health` - Banner and readiness
//! - `api_users` - User endpoints
//! - `api_stores` - Store endpoints
//! - `api_products` - Product endpoints

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use shopkeep_api::state::AppState;

/// Drives the full API router in-process against a test database.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build the router over `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            router: shopkeep_api::app(AppState::with_service_name("shopkeep-it", pool)),
        }
    }

    /// Send a request and decode the JSON response.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the response is not JSON.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.dispatch(method, uri, body).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = serde_json::from_slice(&bytes).expect("JSON response body");
        (status, json)
    }

    /// `GET uri`, returning only the status. For endpoints without a JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built.
    pub async fn get_status(&self, uri: &str) -> StatusCode {
        self.dispatch(Method::GET, uri, None).await.status()
    }

    async fn dispatch(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("valid request"))
            .await
            .expect("router is infallible")
    }

    /// `GET uri`.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    /// `POST uri` with a JSON body.
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// `PUT uri` with a JSON body.
    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    /// `DELETE uri`.
    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a user and return its id.
    ///
    /// # Panics
    ///
    /// Panics if creation does not return 201.
    pub async fn create_user(&self, email: &str, name: &str) -> i64 {
        let (status, body) = self
            .post("/users", serde_json::json!({ "email": email, "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create user: {body}");
        body["id"].as_i64().expect("user id")
    }

    /// Create a store owned by `user_id` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if creation does not return 201.
    pub async fn create_store(&self, name: &str, user_id: i64) -> i64 {
        let (status, body) = self
            .post("/stores", serde_json::json!({ "name": name, "userId": user_id }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create store: {body}");
        body["id"].as_i64().expect("store id")
    }

    /// Create a product in `store_id` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if creation does not return 201.
    pub async fn create_product(&self, name: &str, price: f64, store_id: i64) -> i64 {
        let (status, body) = self
            .post(
                "/products",
                serde_json::json!({ "name": name, "price": price, "storeId": store_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create product: {body}");
        body["id"].as_i64().expect("product id")
    }
}
