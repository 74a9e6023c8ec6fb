//! Endpoint handlers.

use axum::{
    extract::{rejection::PathRejection, Path},
    Extension, Json,
};

use crate::http::request::Bound;
use crate::model::{Customer, Product};
use crate::security::AuthenticatedUser;

pub async fn ping() -> &'static str {
    "ping"
}

/// Stub lookup: the id is logged, never resolved.
pub async fn get_product(id: Result<Path<String>, PathRejection>) -> &'static str {
    match id {
        Ok(Path(id)) => tracing::info!(id = %id, "Product requested"),
        Err(rejection) => tracing::debug!(error = %rejection, "Product id not decodable"),
    }
    "hello world"
}

pub async fn create_product(
    Extension(user): Extension<AuthenticatedUser>,
    Bound(product): Bound<Product>,
) -> String {
    tracing::info!(user = %user.0, id = %product.id, name = %product.name, "Product bound");
    product.id
}

pub async fn create_customer(Bound(customer): Bound<Customer>) -> Json<Customer> {
    tracing::info!(
        email = %customer.email,
        role = ?customer.role(),
        has_address = !customer.street_address.is_empty(),
        "Customer bound"
    );
    Json(customer)
}
