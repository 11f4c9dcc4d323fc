//! HTTP server for the payscope daemon.
//!
//! Provides REST API for:
//! - Status and health checks
//! - Salary, performance, promotion, insight and summary views
//! - The bundled analytics report
//! - Ad-hoc analysis of an uploaded CSV body

mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::info;

/// Bind `addr` and serve the API until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let data_path = state.data_path.clone();
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Serving {} on http://{}", data_path.display(), addr);
    axum::serve(listener, router)
        .await
        .context("HTTP server failed")?;
    Ok(())
}
