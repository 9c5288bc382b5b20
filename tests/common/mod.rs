//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use routebind::{HttpServer, ServerConfig, Shutdown};

/// Start the service on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the handle
/// stops the server, so callers must keep it alive for the test's duration.
pub async fn spawn_server() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(ServerConfig::default());

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client with connection pooling disabled for test isolation.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
