//! Route table and dispatch.
//!
//! # Responsibilities
//! - Register (method, path pattern) → handler
//! - Put the Basic-auth gate in front of `POST /products` only
//! - Answer everything else with 404
//!
//! # Design Decisions
//! - A known path with an unsupported method is a 404, not a 405
//! - The gate is a route layer, so it only runs once the route has matched
//! - Request bodies are not size-capped

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::http::handlers;
use crate::http::response::not_found;
use crate::http::server::AppState;
use crate::security::require_basic_auth;

/// Build the dispatch table over `state`.
pub fn routes(state: AppState) -> Router {
    let auth_gate = middleware::from_fn_with_state(state.auth.clone(), require_basic_auth);

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/products/{id}", get(handlers::get_product))
        .route("/products", post(handlers::create_product).route_layer(auth_gate))
        .route("/customers", post(handlers::create_customer))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
