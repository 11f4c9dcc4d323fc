//! payscope core - employee salary and performance analytics.
//!
//! This crate turns a small tabular employee dataset into a set of derived,
//! read-only views. It is consumed by the `payscope` CLI and the
//! `payscope-daemon` HTTP server.
//!
//! # Features
//!
//! - **Loader/validator**: statically typed CSV loading that fails closed on
//!   schema mismatch, bad numbers and duplicate identifiers
//! - **Aggregation pipeline**: salary, performance, promotion, correlation
//!   and summary views as pure functions over the record set
//! - **Exporters**: processed CSV output, JSON and Markdown reports
//!
//! # Usage
//!
//! ```no_run
//! use payscope_core::{loader, AnalyticsPipeline};
//!
//! let loaded = loader::load_path("employees.csv")?;
//! let pipeline = AnalyticsPipeline::default();
//! let report = pipeline.run(&loaded.records);
//! println!("{} departments", report.salary.len());
//! # Ok::<(), payscope_core::DataError>(())
//! ```

pub mod error;
pub mod exporter;
pub mod loader;
pub mod pipeline;
pub mod sample;
pub mod types;

pub use error::{DataError, Result};
pub use loader::{LoadReport, Loader, SkippedRow};
pub use pipeline::{
    AnalyticsPipeline, AnalyticsReport, CorrelationInsight, DepartmentSalarySummary,
    DepartmentSummary, LevelCounts, PerformanceAnalytics, PromotionAnalytics, PromotionDecision,
    TopPerformer,
};
pub use types::{
    is_promotion_eligible, performance_level, EmployeeRecord, PerformanceLevel, ProcessedRecord,
    Thresholds,
};

/// Get the version of payscope-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
