//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the listener address
//! - Check the credential set is usable by the Basic-auth gate
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    InvalidBindAddress(String),

    #[error("auth.accounts is empty")]
    NoAccounts,

    #[error("auth.accounts contains an empty username")]
    EmptyUsername,

    #[error("auth.accounts username `{0}` contains ':'")]
    UsernameContainsColon(String),

    #[error("auth.realm `{0}` must be non-empty printable ASCII without '\"'")]
    InvalidRealm(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.auth.accounts.is_empty() {
        errors.push(ValidationError::NoAccounts);
    }

    for username in config.auth.accounts.keys() {
        if username.is_empty() {
            errors.push(ValidationError::EmptyUsername);
        } else if username.contains(':') {
            errors.push(ValidationError::UsernameContainsColon(username.clone()));
        }
    }

    let realm = &config.auth.realm;
    if realm.is_empty() || !realm.chars().all(|c| (' '..='~').contains(&c) && c != '"') {
        errors.push(ValidationError::InvalidRealm(realm.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
