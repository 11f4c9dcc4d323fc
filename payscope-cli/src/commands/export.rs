//! Export command - write the processed dataset
//!
//! The processed file carries the input columns followed by
//! `performance_level` and `promotion_eligible`, in input order.

use anyhow::{Context as _, Result};
use colored::Colorize;
use payscope_core::exporter::csv::write_processed_file;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::Context;
use crate::output::{CsvOutput, MarkdownOutput, Output, OutputConfig, Outputter, TableOutput};

/// What `export` wrote.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub path: String,
    pub records: usize,
    pub skipped: usize,
}

impl ExportResult {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Path", self.path.clone()),
            ("Records", self.records.to_string()),
            ("Skipped rows", self.skipped.to_string()),
        ]
    }
}

impl Outputter for ExportResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let status = if config.use_colors() {
            "SUCCESS:".green().bold().to_string()
        } else {
            "SUCCESS:".to_string()
        };
        format!(
            "{} processed data saved\n{}",
            status,
            TableOutput::key_value(&self.pairs(), config)
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &["path", "records", "skipped"],
            &[vec![
                self.path.clone(),
                self.records.to_string(),
                self.skipped.to_string(),
            ]],
        )
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .pairs()
            .into_iter()
            .map(|(k, v)| vec![k.to_string(), v])
            .collect();
        MarkdownOutput::table(&["Field", "Value"], &rows, &[])
    }
}

/// Load, derive and write. Returns what was written.
pub fn export_to(ctx: &Context, path: &Path) -> Result<ExportResult> {
    let loaded = ctx.load()?;
    let processed = ctx.pipeline.process(&loaded.records);
    write_processed_file(path, &processed, ctx.delimiter)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(ExportResult {
        path: path.display().to_string(),
        records: processed.len(),
        skipped: loaded.skipped.len(),
    })
}

pub fn run(ctx: &Context, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| ctx.output_path.clone());
    let result = export_to(ctx, &path)?;
    Output::new(result, &ctx.output).render()
}
