//! HTTP routing and parameter binding demo service.
//!
//! A small Axum service demonstrating declarative route dispatch with an
//! explicit parameter-binding layer: query parameters (required, optional
//! with default, typed), path variables, request cookies, response cookies,
//! and view responses rendered by an external collaborator.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ middleware (request ID, trace, timeout)
//!                         │
//!                         ▼
//!                     route dispatch (method + path)
//!                         │
//!                         ▼
//!                     contract bind (validate, default, convert)
//!                         │              │
//!                         ▼              ▼ on violation
//!                     handler body    HTTP 400
//!                         │
//!     Client Response ◀── View (name + model) or raw text
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use routebind::config::loader::load_config;
use routebind::{HttpServer, ServerConfig, Shutdown};

#[derive(Parser, Debug)]
#[command(name = "routebind", about = "HTTP routing and parameter binding demo")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address from the config.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    routebind::observability::logging::init(&config.observability.log_filter);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
