//! Shop API router.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TraceLayer ─▶ CatchPanic ─▶ routing ─┬─▶ GET  /ping
//!                                                          ├─▶ GET  /products/{id}
//!                                                          ├─▶ [basic auth] ─▶ POST /products
//!                                                          ├─▶ POST /customers
//!                                                          └─▶ 404
//!
//!     POST handlers: body ─▶ JSON decode ─▶ constraint list ─▶ 200 | 400
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use shop_router::lifecycle::startup::{resolve_config, DEFAULT_CONFIG_FILE};
use shop_router::observability::logging;
use shop_router::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(Path::new(DEFAULT_CONFIG_FILE))?;

    logging::init(&config.observability.log_filter);

    tracing::info!("shop-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        accounts = config.auth.accounts.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
