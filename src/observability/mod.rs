//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, auth gate, validator:
//!     → tracing events (structured fields, never passwords)
//! HTTP layer:
//!     → tower_http TraceLayer (one span per request)
//! Both:
//!     → logging.rs subscriber (fmt output, EnvFilter)
//! ```

pub mod logging;
