//! Analyze command - the full batch run
//!
//! Loads the dataset (or the bundled sample), prints every view in order and
//! optionally saves the processed file.

use anyhow::Result;
use payscope_core::exporter::{csv as processed_csv, markdown};
use payscope_core::{sample, AnalyticsReport, ProcessedRecord, SkippedRow};
use serde::Serialize;
use tracing::info;

use super::employees::EmployeesView;
use super::insights::InsightsView;
use super::performance::PerformanceView;
use super::promotion::PromotionView;
use super::salary::SalaryView;
use super::summary::SummaryView;
use super::Context;
use crate::output::{heading, Output, OutputConfig, Outputter};

#[derive(Debug, Serialize)]
pub struct AnalyzeView {
    /// Where the records came from
    pub source: String,
    #[serde(flatten)]
    pub report: AnalyticsReport,
    pub skipped: Vec<SkippedRow>,
    #[serde(skip)]
    pub processed: Vec<ProcessedRecord>,
    #[serde(skip)]
    pub delimiter: u8,
}

impl Outputter for AnalyzeView {
    fn to_table(&self, config: &OutputConfig) -> String {
        let report = &self.report;
        let summary = SummaryView {
            total_employees: report.record_count,
            total_salary: report.total_salary(),
            departments: report.summary.clone(),
            level_counts: report.performance.level_counts,
            salary_performance_correlation: report.insights.salary_performance_correlation,
        };

        let mut sections = vec![format!(
            "{} ({} records from {}, {} skipped)",
            heading("Employee Salary & Performance Analytics", config),
            report.record_count,
            self.source,
            self.skipped.len()
        )];
        let mut push = |title: &str, body: String| {
            sections.push(String::new());
            sections.push(heading(&format!("=== {} ===", title), config));
            sections.push(body);
        };

        push(
            "Employees",
            EmployeesView::new(self.processed.clone(), self.delimiter).to_table(config),
        );
        push(
            "Salary Analytics",
            SalaryView {
                departments: report.salary.clone(),
            }
            .to_table(config),
        );
        push(
            "Performance Analytics",
            PerformanceView {
                analytics: report.performance.clone(),
            }
            .to_table(config),
        );
        push(
            "Promotion Eligibility",
            PromotionView::new(report.promotion.clone(), false).to_table(config),
        );
        push(
            "Salary vs Performance Insights",
            InsightsView {
                insight: report.insights.clone(),
            }
            .to_table(config),
        );
        push("Summary", summary.to_table(config));

        sections.join("\n")
    }

    /// The processed records, as the batch run writes them.
    fn to_csv(&self, config: &OutputConfig) -> String {
        EmployeesView::new(self.processed.clone(), self.delimiter).to_csv(config)
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        markdown::export(&self.report, None)
    }
}

pub fn run(ctx: &Context, use_sample: bool, save: bool) -> Result<()> {
    let (records, skipped, source) = if use_sample {
        (sample::employees(), Vec::new(), "built-in sample".to_string())
    } else {
        let loaded = ctx.load()?;
        (
            loaded.records,
            loaded.skipped,
            ctx.data_path.display().to_string(),
        )
    };

    let processed = ctx.pipeline.process(&records);
    if save {
        processed_csv::write_processed_file(&ctx.output_path, &processed, ctx.delimiter)?;
        info!("Processed data saved to {}", ctx.output_path.display());
    }

    let view = AnalyzeView {
        source,
        report: ctx.pipeline.run(&records),
        skipped,
        processed,
        delimiter: ctx.delimiter,
    };
    Output::new(view, &ctx.output).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use payscope_core::AnalyticsPipeline;

    fn view() -> AnalyzeView {
        let pipeline = AnalyticsPipeline::default();
        let records = sample::employees();
        AnalyzeView {
            source: "test".to_string(),
            report: pipeline.run(&records),
            skipped: Vec::new(),
            processed: pipeline.process(&records),
            delimiter: b',',
        }
    }

    #[test]
    fn test_table_has_every_section() {
        let config = OutputConfig::new(OutputFormat::Table)
            .without_colors()
            .without_wrapping();
        let output = view().to_table(&config);

        for section in [
            "=== Employees ===",
            "=== Salary Analytics ===",
            "=== Performance Analytics ===",
            "=== Promotion Eligibility ===",
            "=== Salary vs Performance Insights ===",
            "=== Summary ===",
        ] {
            assert!(output.contains(section), "missing {}", section);
        }
        assert!(output.contains("5 records from test, 0 skipped"));
    }

    #[test]
    fn test_json_flattens_report() {
        let output = view().to_json(&OutputConfig::new(OutputFormat::Json).compact());
        assert!(output.contains("\"source\":\"test\""));
        assert!(output.contains("\"record_count\":5"));
        assert!(!output.contains("processed"));
    }
}
