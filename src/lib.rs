//! Shop API router library: four endpoints, JSON binding with field
//! constraints, and a Basic-auth gate.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod routing;
pub mod security;
pub mod validation;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
