//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + panic layers)
//!     → routing (method + path → handler, auth gate)
//!     → request.rs (body → validated entity)
//!     → handlers.rs (entity → response)
//!     → response.rs (400 / 404 bodies)
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::Bound;
pub use server::{AppState, HttpServer};
