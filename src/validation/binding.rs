//! JSON body binding: decode, then validate.

use serde::de::DeserializeOwned;

use super::engine::{FieldError, Validate, Validator};

/// Why a request body could not be bound to an entity.
///
/// Both variants display the underlying library message unchanged; that text
/// is what clients receive in the 400 body.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] FieldError),
}

/// Decode `body` as JSON into `T` and run `T`'s constraints.
pub fn bind_json<T>(validator: &Validator, body: &[u8]) -> Result<T, BindError>
where
    T: DeserializeOwned + Validate,
{
    let entity: T = serde_json::from_slice(body)?;
    validator.validate(&entity)?;
    Ok(entity)
}
