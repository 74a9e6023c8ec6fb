//! Request authentication.
//!
//! # Data Flow
//! ```text
//! AuthConfig.accounts (loaded once)
//!     → credentials.rs (immutable Credentials, Arc-shared)
//!     → basic_auth.rs (BasicAuth gate, axum middleware)
//!     → handler runs with AuthenticatedUser, or 401 challenge
//! ```

pub mod basic_auth;
pub mod credentials;

pub use basic_auth::{require_basic_auth, AuthenticatedUser, BasicAuth, DEFAULT_REALM};
pub use credentials::Credentials;
