//! Request extractors that reject with [`AppError`].
//!
//! Axum's own `Json` and `Path` reject with plain-text bodies and a mix of
//! 400/415/422 statuses. These wrappers route every rejection through
//! `AppError::BadRequest` so clients always get the JSON envelope and a 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Route parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
