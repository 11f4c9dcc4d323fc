//! Command implementations for the payscope CLI
//!
//! Each command module provides a `run` function that executes the command
//! logic against a shared [`Context`].

pub mod analyze;
pub mod completions;
pub mod employees;
pub mod export;
pub mod insights;
pub mod performance;
pub mod promotion;
pub mod report;
pub mod salary;
pub mod serve;
pub mod summary;
pub mod validate;

use anyhow::{Context as _, Result};
use payscope_core::{AnalyticsPipeline, LoadReport, Loader};
use std::path::PathBuf;
use tracing::debug;

use crate::output::OutputConfig;

/// Everything a command needs, resolved from flags and `.payscope.toml`.
pub struct Context {
    /// Dataset read by the analytics commands
    pub data_path: PathBuf,
    /// Default destination of `payscope export`
    pub output_path: PathBuf,
    pub loader: Loader,
    pub pipeline: AnalyticsPipeline,
    /// Field delimiter, reused when writing the processed file
    pub delimiter: u8,
    pub output: OutputConfig,
    pub server_host: String,
    pub server_port: u16,
}

impl Context {
    /// Load and validate the dataset.
    pub fn load(&self) -> Result<LoadReport> {
        let loaded = self
            .loader
            .load_path(&self.data_path)
            .with_context(|| format!("Failed to load {}", self.data_path.display()))?;
        debug!(
            "{} records, {} skipped, {} derived mismatches",
            loaded.len(),
            loaded.skipped.len(),
            loaded.derived_mismatches
        );
        Ok(loaded)
    }
}
