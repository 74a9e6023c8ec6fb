//! Error and fallback responses.
//!
//! # Design Decisions
//! - Binding failures are plain-text 400s carrying the decoder or validator
//!   message as-is
//! - Unknown routes and unsupported methods share one 404 body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::validation::BindError;

/// Body of every 404.
pub const NOT_FOUND_BODY: &str = "404 page not found";

impl IntoResponse for BindError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
