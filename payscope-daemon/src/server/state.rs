//! Shared application state for the server.

use payscope_core::{AnalyticsPipeline, LoadReport, Loader};
use std::path::PathBuf;
use std::time::Instant;

/// Shared application state.
///
/// Immutable after startup. The dataset is re-read on every request, so edits
/// to the file show up without a restart.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dataset served by the analytics endpoints
    pub data_path: PathBuf,
    /// Loader configured with the dataset delimiter
    pub loader: Loader,
    /// Pipeline holding the classification cut-offs and top-N size
    pub pipeline: AnalyticsPipeline,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(data_path: impl Into<PathBuf>, loader: Loader, pipeline: AnalyticsPipeline) -> Self {
        Self {
            data_path: data_path.into(),
            loader,
            pipeline,
            start_time: Instant::now(),
        }
    }

    /// Load the served dataset from disk.
    pub fn load(&self) -> payscope_core::Result<LoadReport> {
        self.loader.load_path(&self.data_path)
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
