//! Integration tests for the banner and health endpoints.

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use shopkeep_integration_tests::TestApp;

#[sqlx::test(migrator = "shopkeep_api::db::MIGRATOR")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_readiness_with_database_is_200(pool: PgPool) {
    let app = TestApp::new(pool);

    assert_eq!(app.get_status("/health/ready").await, StatusCode::OK);
    assert_eq!(app.get_status("/health").await, StatusCode::OK);
}

#[sqlx::test(migrator = "shopkeep_api::db::MIGRATOR")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_banner_names_service(pool: PgPool) {
    let app = TestApp::new(pool);

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "service": "shopkeep-it" }));
}
