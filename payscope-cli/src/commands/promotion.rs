//! Promotion command - eligibility per employee

use anyhow::Result;
use payscope_core::{PromotionAnalytics, PromotionDecision};
use serde::Serialize;

use super::Context;
use crate::output::{
    amount, eligibility_label, CsvOutput, MarkdownOutput, Output, OutputConfig, Outputter,
    TableOutput,
};

const HEADERS: [&str; 6] = ["ID", "Name", "Department", "Years", "Score", "Eligible"];

#[derive(Debug, Serialize)]
pub struct PromotionView {
    pub decisions: Vec<PromotionDecision>,
    pub eligible_count: usize,
    pub ineligible_count: usize,
}

impl PromotionView {
    /// Build the view, optionally keeping only eligible employees. The counts
    /// always cover the whole dataset.
    pub fn new(analytics: PromotionAnalytics, eligible_only: bool) -> Self {
        let decisions = if eligible_only {
            analytics.decisions.into_iter().filter(|d| d.eligible).collect()
        } else {
            analytics.decisions
        };
        Self {
            decisions,
            eligible_count: analytics.eligible_count,
            ineligible_count: analytics.ineligible_count,
        }
    }

    fn rows(&self, config: &OutputConfig) -> Vec<Vec<String>> {
        self.decisions
            .iter()
            .map(|d| {
                vec![
                    d.record.emp_id.clone(),
                    d.record.name.clone(),
                    d.record.department.clone(),
                    d.record.years_exp.to_string(),
                    amount(d.record.performance_score),
                    eligibility_label(d.eligible, config),
                ]
            })
            .collect()
    }

    fn footer(&self) -> String {
        format!(
            "{} eligible, {} not eligible",
            self.eligible_count, self.ineligible_count
        )
    }
}

impl Outputter for PromotionView {
    fn to_table(&self, config: &OutputConfig) -> String {
        format!(
            "{}\n{}",
            TableOutput::from_rows(&HEADERS, &self.rows(config), &[3, 4], config),
            self.footer()
        )
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        let plain = config.clone().without_colors();
        CsvOutput::from_rows(
            &[
                "emp_id",
                "name",
                "department",
                "years_exp",
                "performance_score",
                "promotion_eligible",
            ],
            &self.rows(&plain),
        )
    }

    fn to_markdown(&self, config: &OutputConfig) -> String {
        let plain = config.clone().without_colors();
        format!(
            "{}\n\n_{}_",
            MarkdownOutput::table(&HEADERS, &self.rows(&plain), &[3, 4]),
            self.footer()
        )
    }
}

pub fn run(ctx: &Context, eligible_only: bool) -> Result<()> {
    let loaded = ctx.load()?;
    let view = PromotionView::new(
        ctx.pipeline.promotion_analytics(&loaded.records),
        eligible_only,
    );
    Output::new(view, &ctx.output).render()
}
