//! Request body binding.
//!
//! # Responsibilities
//! - Buffer the request body
//! - Decode and validate it through the shared validator
//! - Reject with 400 + library error text on failure
//!
//! # Design Decisions
//! - `Content-Type` is not inspected; every body is read as JSON

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::http::server::AppState;
use crate::validation::{bind_json, Validate};

/// Extractor for a decoded, constraint-checked entity.
#[derive(Debug, Clone)]
pub struct Bound<T>(pub T);

impl<T> FromRequest<AppState> for Bound<T>
where
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        bind_json(&state.validator, &body).map(Bound).map_err(|e| {
            tracing::debug!(entity = T::ENTITY, error = %e, "Request body rejected");
            e.into_response()
        })
    }
}
