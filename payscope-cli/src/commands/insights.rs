//! Insights command - salary/performance correlation

use anyhow::Result;
use payscope_core::CorrelationInsight;
use serde::Serialize;

use super::Context;
use crate::output::{
    correlation, heading, CsvOutput, MarkdownOutput, Output, OutputConfig, Outputter, TableOutput,
};

const HEADERS: [&str; 2] = ["Department", "Avg Performance"];

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct InsightsView {
    pub insight: CorrelationInsight,
}

impl InsightsView {
    fn summary_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Correlation",
                correlation(self.insight.salary_performance_correlation),
            ),
            ("Strength", self.insight.strength().to_string()),
            ("Records", self.insight.record_count.to_string()),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.insight
            .average_performance_by_department
            .iter()
            .map(|(department, avg)| vec![department.clone(), format!("{:.2}", avg)])
            .collect()
    }
}

impl Outputter for InsightsView {
    fn to_table(&self, config: &OutputConfig) -> String {
        [
            heading("Salary vs performance", config),
            TableOutput::key_value(&self.summary_pairs(), config),
            heading("Average performance by department", config),
            TableOutput::from_rows(&HEADERS, &self.rows(), &[1], config),
        ]
        .join("\n")
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(&["department", "average_performance_score"], &self.rows())
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        let pairs: Vec<String> = self
            .summary_pairs()
            .into_iter()
            .map(|(k, v)| format!("- **{}:** {}", k, v))
            .collect();
        format!(
            "{}\n{}",
            pairs.join("\n"),
            MarkdownOutput::table(&HEADERS, &self.rows(), &[1])
        )
    }
}

pub fn run(ctx: &Context) -> Result<()> {
    let loaded = ctx.load()?;
    let view = InsightsView {
        insight: ctx.pipeline.insights(&loaded.records),
    };
    Output::new(view, &ctx.output).render()
}
