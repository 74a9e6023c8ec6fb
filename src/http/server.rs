//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the shared application state (validator, auth gate)
//! - Create the Axum router with all handlers
//! - Wire up middleware (request tracing, panic recovery)
//! - Serve on a bound listener until shutdown

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::lifecycle::signals;
use crate::routing;
use crate::security::{BasicAuth, Credentials};
use crate::validation::{rules, Validator};

/// Application state injected into handlers. Immutable after start-up.
#[derive(Debug, Clone)]
pub struct AppState {
    pub validator: Arc<Validator>,
    pub auth: BasicAuth,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let mut validator = Validator::new();
        validator.register(rules::PASSWORD, rules::password);

        let credentials = Credentials::new(config.auth.accounts.clone());

        Self {
            validator: Arc::new(validator),
            auth: BasicAuth::new(credentials, &config.auth.realm),
        }
    }
}

/// HTTP server for the shop API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::new(&config);
        tracing::debug!(accounts = config.auth.accounts.len(), realm = %config.auth.realm, "Auth gate configured");

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        routing::router::routes(state)
            .layer(CatchPanicLayer::new())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until Ctrl+C or a shutdown broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::ctrl_c() => {}
                    _ = shutdown.recv() => tracing::info!("Shutdown requested"),
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
