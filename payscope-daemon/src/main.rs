//! payscope daemon - HTTP query server for employee analytics.
//!
//! A single binary that serves the analytics views of one dataset file as
//! JSON. The file is re-read on every request.

use anyhow::{bail, Context, Result};
use clap::Parser;
use payscope_core::{AnalyticsPipeline, Loader, Thresholds};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use payscope_daemon::{serve, AppState};

/// payscope analytics daemon
#[derive(Parser, Debug)]
#[command(name = "payscope-daemon")]
#[command(about = "HTTP query server for payscope employee analytics")]
#[command(version)]
struct Cli {
    /// Dataset to serve
    #[arg(long, env = "PAYSCOPE_DATA", default_value = "employees.csv")]
    data: PathBuf,

    /// Address to bind
    #[arg(long, env = "PAYSCOPE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// HTTP port to listen on
    #[arg(short, long, env = "PAYSCOPE_PORT", default_value = "9130")]
    port: u16,

    /// Default size of the top performer ranking
    #[arg(long, env = "PAYSCOPE_TOP_N", default_value = "3")]
    top_n: usize,

    /// Field delimiter of the dataset
    #[arg(long, env = "PAYSCOPE_DELIMITER", default_value = ",")]
    delimiter: char,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", cli.delimiter);
    }

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", cli.host, cli.port))?;

    let loader = Loader::new().with_delimiter(cli.delimiter as u8);
    let pipeline = AnalyticsPipeline::new(Thresholds::default(), cli.top_n);
    let state = AppState::new(cli.data, loader, pipeline);

    info!("Starting payscope daemon for {:?}", state.data_path);
    match state.load() {
        Ok(loaded) => info!(
            "Dataset loaded: {} records, {} skipped",
            loaded.len(),
            loaded.skipped.len()
        ),
        // Keep serving; requests report the error until the file is fixed.
        Err(e) => tracing::warn!("Dataset not usable yet: {}", e),
    }

    serve(state, addr).await
}
