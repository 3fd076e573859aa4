//! HTTP surface
//!
//! ```text
//! GET  /                  - request form
//! GET  /static/{*path}    - files from the static directory
//! POST /filter-and-copy   - filter the source tree and copy matches
//! ```

pub mod error;
pub mod handlers;

pub use error::ApiError;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;

/// Configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared handler state; read-only
#[derive(Debug, Clone)]
pub struct ServerState {
    pub static_dir: PathBuf,
}

impl ServerState {
    pub fn new(static_dir: PathBuf) -> Self {
        Self { static_dir }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/static/{*path}", get(handlers::static_handler))
        .route("/filter-and-copy", post(handlers::filter_and_copy_handler))
        .with_state(state)
}

/// Serve on an already bound listener until the process stops
pub async fn serve(listener: TcpListener, state: ServerState) -> Result<()> {
    let addr: SocketAddr = listener.local_addr().context("Listener has no local address")?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")
}

/// Bind the configured address and serve
pub async fn run(config: &ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;

    serve(listener, ServerState::new(config.static_dir.clone())).await
}
