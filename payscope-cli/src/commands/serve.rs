//! Serve command - start the HTTP query server in the foreground
//!
//! Runs the same router as `payscope-daemon`, configured from the CLI
//! context.

use anyhow::{Context as _, Result};
use colored::Colorize;
use payscope_daemon::AppState;
use std::net::SocketAddr;

use super::Context;

const ENDPOINTS: [(&str, &str); 10] = [
    ("GET  /health", "Health check"),
    ("GET  /status", "Dataset and server status"),
    ("GET  /api/employees", "Records with derived columns"),
    ("GET  /api/salary-analytics", "Salary per department"),
    ("GET  /api/performance-analytics?top=", "Levels and top performers"),
    ("GET  /api/promotion-analytics", "Promotion eligibility"),
    ("GET  /api/insights", "Salary/performance correlation"),
    ("GET  /api/summary", "Department summary"),
    ("GET  /api/report", "Every view at once"),
    ("POST /api/analyze", "Analyze a posted CSV"),
];

pub async fn run(ctx: &Context, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.server_host.clone());
    let port = port.unwrap_or(ctx.server_port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    // Fail early on a dataset that cannot be served at all.
    let loaded = ctx.load()?;

    println!();
    println!(
        "  {} payscope server v{}",
        "▲".cyan(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  {} {}", "→".green(), format!("http://{}", addr).cyan());
    println!();
    println!(
        "  {} {} records from {}",
        "◆".yellow(),
        loaded.len(),
        ctx.data_path.display()
    );
    println!();
    println!("  {}", "Endpoints:".dimmed());
    for (route, description) in ENDPOINTS {
        println!("    {:<40} {}", route, description);
    }
    println!();
    println!("  Press {} to stop", "Ctrl+C".yellow());
    println!();

    let state = AppState::new(
        ctx.data_path.clone(),
        ctx.loader.clone(),
        ctx.pipeline.clone(),
    );
    payscope_daemon::serve(state, addr).await
}
