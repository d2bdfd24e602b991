//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `TraceLayer` (request span with method, uri, status, latency)
//! 3. Request ID (record in span, scope over the handler, echo in response headers)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, current_request_id, request_id_middleware};
