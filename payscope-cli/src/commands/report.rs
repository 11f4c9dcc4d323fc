//! Report command - a standalone Markdown or JSON report document

use anyhow::{Context as _, Result};
use chrono::Utc;
use payscope_core::exporter::{json, markdown};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::Context;

/// Render the full report. `json` switches from Markdown to pretty JSON.
pub fn render(ctx: &Context, json_output: bool) -> Result<String> {
    let loaded = ctx.load()?;
    let report = ctx.pipeline.run(&loaded.records);

    if json_output {
        json::export(&report, true).context("Failed to serialize report")
    } else {
        Ok(markdown::export(&report, Some(Utc::now())))
    }
}

pub fn run(ctx: &Context, output: Option<PathBuf>, json_output: bool) -> Result<()> {
    let document = render(ctx, json_output)?;

    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", document))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
            println!("Report written to {}", path.display());
        }
        None => println!("{}", document),
    }
    Ok(())
}
