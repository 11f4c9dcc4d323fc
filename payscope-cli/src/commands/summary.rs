//! Summary command - headcount, payroll and level counts per department

use anyhow::Result;
use payscope_core::{AnalyticsPipeline, DepartmentSummary, EmployeeRecord, LevelCounts, PerformanceLevel};
use serde::Serialize;
use std::collections::BTreeMap;

use super::Context;
use crate::output::{
    amount, correlation, heading, level_label, CsvOutput, MarkdownOutput, Output, OutputConfig,
    Outputter, TableOutput,
};

const HEADERS: [&str; 4] = ["Department", "Employees", "Total Salary", "Avg Performance"];

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub total_employees: usize,
    pub total_salary: f64,
    pub departments: BTreeMap<String, DepartmentSummary>,
    pub level_counts: LevelCounts,
    pub salary_performance_correlation: Option<f64>,
}

impl SummaryView {
    pub fn build(pipeline: &AnalyticsPipeline, records: &[EmployeeRecord]) -> Self {
        let departments = pipeline.summary(records);
        Self {
            total_employees: records.len(),
            total_salary: departments.values().map(|d| d.total_salary).sum(),
            departments,
            level_counts: pipeline.performance_analytics(records).level_counts,
            salary_performance_correlation: pipeline
                .insights(records)
                .salary_performance_correlation,
        }
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.departments
            .iter()
            .map(|(department, s)| {
                vec![
                    department.clone(),
                    s.employee_count.to_string(),
                    amount(s.total_salary),
                    format!("{:.2}", s.average_performance),
                ]
            })
            .collect()
    }

    fn level_rows(&self, config: &OutputConfig) -> Vec<Vec<String>> {
        PerformanceLevel::ALL
            .iter()
            .map(|&level| {
                vec![
                    level_label(level, config),
                    self.level_counts.get(level).to_string(),
                ]
            })
            .collect()
    }

    fn totals(&self) -> String {
        format!(
            "{} employees, total salary {}, correlation {}",
            self.total_employees,
            amount(self.total_salary),
            correlation(self.salary_performance_correlation)
        )
    }
}

impl Outputter for SummaryView {
    fn to_table(&self, config: &OutputConfig) -> String {
        [
            heading("Departments", config),
            TableOutput::from_rows(&HEADERS, &self.rows(), &[1, 2, 3], config),
            heading("Performance levels", config),
            TableOutput::from_rows(&["Level", "Employees"], &self.level_rows(config), &[1], config),
            self.totals(),
        ]
        .join("\n")
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &[
                "department",
                "employee_count",
                "total_salary_expense",
                "average_performance",
            ],
            &self.rows(),
        )
    }

    fn to_markdown(&self, config: &OutputConfig) -> String {
        let plain = config.clone().without_colors();
        format!(
            "{}\n{}\n_{}_",
            MarkdownOutput::section(
                "Departments",
                &MarkdownOutput::table(&HEADERS, &self.rows(), &[1, 2, 3])
            ),
            MarkdownOutput::section(
                "Performance Levels",
                &MarkdownOutput::table(&["Level", "Employees"], &self.level_rows(&plain), &[1])
            ),
            self.totals()
        )
    }
}

pub fn run(ctx: &Context) -> Result<()> {
    let loaded = ctx.load()?;
    let view = SummaryView::build(&ctx.pipeline, &loaded.records);
    Output::new(view, &ctx.output).render()
}
