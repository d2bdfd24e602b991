//! Request ID middleware for request tracing and correlation.
//!
//! Each request gets an id, taken from a non-empty incoming `x-request-id`
//! header or freshly generated as a UUID v4. The id is recorded on the
//! `http_request` span, tagged on the Sentry scope, echoed in the response
//! header, and available to the handler's task through
//! [`current_request_id`] so error log lines can carry it.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    static REQUEST_ID: String;
}

/// The id of the request being handled on this task, if any.
#[must_use]
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}

/// Middleware that assigns every request an id and scopes it over the
/// downstream handler.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let header = HeaderValue::from_str(&request_id).ok();
    let mut response = REQUEST_ID.scope(request_id, next.run(request)).await;

    if let Some(value) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    use super::*;

    fn echo_app() -> Router {
        Router::new()
            .route(
                "/",
                get(|| async { current_request_id().unwrap_or_default() }),
            )
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_handler_sees_incoming_request_id() {
        let request = Request::get("/")
            .header(REQUEST_ID_HEADER, "edge-42")
            .body(Body::empty())
            .unwrap();
        let response = echo_app().oneshot(request).await.unwrap();

        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "edge-42");
        assert_eq!(body_text(response).await, "edge-42");
    }

    #[tokio::test]
    async fn test_blank_header_gets_generated_id() {
        let request = Request::get("/")
            .header(REQUEST_ID_HEADER, "   ")
            .body(Body::empty())
            .unwrap();
        let response = echo_app().oneshot(request).await.unwrap();

        let header = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(body_text(response).await, header);
    }

    #[test]
    fn test_no_request_id_outside_a_request() {
        assert!(current_request_id().is_none());
    }
}
