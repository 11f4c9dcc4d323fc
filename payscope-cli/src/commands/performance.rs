//! Performance command - level distribution and top performers

use anyhow::Result;
use payscope_core::{PerformanceAnalytics, PerformanceLevel};
use serde::Serialize;

use super::Context;
use crate::output::{
    amount, heading, level_label, CsvOutput, MarkdownOutput, Output, OutputConfig, Outputter,
    TableOutput,
};

const LEVEL_HEADERS: [&str; 5] = ["Department", "HIGH", "MEDIUM", "LOW", "Avg Score"];
const TOP_HEADERS: [&str; 4] = ["Rank", "Name", "Department", "Score"];

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PerformanceView {
    pub analytics: PerformanceAnalytics,
}

impl PerformanceView {
    /// One row per department plus an overall row.
    fn level_rows(&self) -> Vec<Vec<String>> {
        let a = &self.analytics;
        let mut rows: Vec<Vec<String>> = a
            .by_department
            .iter()
            .map(|(department, counts)| {
                let avg = a
                    .average_score_by_department
                    .get(department)
                    .map(|v| format!("{:.2}", v))
                    .unwrap_or_else(|| "-".to_string());
                vec![
                    department.clone(),
                    counts.high.to_string(),
                    counts.medium.to_string(),
                    counts.low.to_string(),
                    avg,
                ]
            })
            .collect();

        if !rows.is_empty() {
            rows.push(vec![
                "(all)".to_string(),
                a.level_counts.high.to_string(),
                a.level_counts.medium.to_string(),
                a.level_counts.low.to_string(),
                String::new(),
            ]);
        }
        rows
    }

    fn top_rows(&self) -> Vec<Vec<String>> {
        self.analytics
            .top_performers
            .iter()
            .enumerate()
            .map(|(i, t)| {
                vec![
                    (i + 1).to_string(),
                    t.name.clone(),
                    t.department.clone(),
                    amount(t.performance_score),
                ]
            })
            .collect()
    }

    fn distribution(&self, config: &OutputConfig) -> String {
        PerformanceLevel::ALL
            .iter()
            .map(|&level| {
                format!(
                    "{} {}",
                    level_label(level, config),
                    self.analytics.level_counts.get(level)
                )
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Outputter for PerformanceView {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut out = Vec::new();
        out.push(heading("Performance levels by department", config));
        out.push(TableOutput::from_rows(
            &LEVEL_HEADERS,
            &self.level_rows(),
            &[1, 2, 3, 4],
            config,
        ));
        out.push(self.distribution(config));
        out.push(String::new());
        out.push(heading(
            &format!("Top {} performers", self.analytics.top_performers.len()),
            config,
        ));
        out.push(TableOutput::from_rows(
            &TOP_HEADERS,
            &self.top_rows(),
            &[0, 3],
            config,
        ));
        out.join("\n")
    }

    /// Per-department level counts.
    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &["department", "high", "medium", "low", "average_score"],
            &self.level_rows(),
        )
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        let levels = MarkdownOutput::table(&LEVEL_HEADERS, &self.level_rows(), &[1, 2, 3, 4]);
        let top = MarkdownOutput::table(&TOP_HEADERS, &self.top_rows(), &[0, 3]);
        format!(
            "{}\n{}",
            MarkdownOutput::section("Performance Levels", &levels),
            MarkdownOutput::section("Top Performers", &top)
        )
    }
}

pub fn run(ctx: &Context, top: Option<usize>) -> Result<()> {
    let loaded = ctx.load()?;
    let top_n = top.unwrap_or_else(|| ctx.pipeline.top_n());
    let view = PerformanceView {
        analytics: ctx
            .pipeline
            .performance_analytics_top(&loaded.records, top_n),
    };
    Output::new(view, &ctx.output).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use payscope_core::{sample, AnalyticsPipeline};

    fn view() -> PerformanceView {
        PerformanceView {
            analytics: AnalyticsPipeline::default().performance_analytics(&sample::employees()),
        }
    }

    #[test]
    fn test_level_rows_include_overall() {
        let rows = view().level_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], vec!["IT", "1", "1", "0", "86.50"]);
        assert_eq!(rows[3][0], "(all)");
        assert_eq!(rows[3][1], "2");
    }

    #[test]
    fn test_top_rows() {
        let rows = view().top_rows();
        let names: Vec<_> = rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(names, vec!["Amit", "Sneha", "Karan"]);
    }

    #[test]
    fn test_table_output() {
        let config = OutputConfig::new(OutputFormat::Table)
            .without_colors()
            .without_wrapping();
        let output = view().to_table(&config);
        assert!(output.contains("Top 3 performers"));
        assert!(output.contains("HIGH 2  MEDIUM 3  LOW 0"));
    }
}
