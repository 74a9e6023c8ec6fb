//! Shared utilities for integration tests.

use std::net::SocketAddr;

use shop_router::config::AppConfig;
use shop_router::http::HttpServer;
use shop_router::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    #[allow(dead_code)]
    pub async fn stop(self) -> Result<(), std::io::Error> {
        self.shutdown.trigger();
        self.handle.await.expect("server task panicked")
    }
}

/// Start a server with the default configuration.
pub async fn start_server() -> TestServer {
    start_server_with(AppConfig::default()).await
}

/// Start a server with `config`; the bind address is always overridden.
pub async fn start_server_with(config: AppConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer { addr, shutdown, handle }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
