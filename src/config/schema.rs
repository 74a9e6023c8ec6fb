//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so an empty file is a complete configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::security::DEFAULT_REALM;

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Basic-auth realm and credential set.
    pub auth: AuthConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3004").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3004".to_string(),
        }
    }
}

/// Credentials accepted by the Basic-auth gate.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Realm sent in the `WWW-Authenticate` challenge.
    pub realm: String,

    /// Username → password.
    pub accounts: BTreeMap<String, String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            realm: DEFAULT_REALM.to_string(),
            accounts: BTreeMap::from([
                ("john".to_string(), "doe".to_string()),
                ("foo".to_string(), "bar".to_string()),
            ]),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "shop_router=debug,tower_http=debug".to_string(),
        }
    }
}
