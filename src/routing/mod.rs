//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (route lookup, path parameter capture)
//!     → [auth gate, for gated routes]
//!     → handler, or 404 fallback
//! ```
//!
//! # Design Decisions
//! - Routes are fixed at startup, immutable at runtime
//! - Deterministic: same input always matches same route

pub mod router;

pub use router::routes;
