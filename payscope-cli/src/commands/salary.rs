//! Salary command - salary statistics per department

use anyhow::Result;
use payscope_core::DepartmentSalarySummary;
use serde::Serialize;
use std::collections::BTreeMap;

use super::Context;
use crate::output::{amount, CsvOutput, MarkdownOutput, Output, OutputConfig, Outputter, TableOutput};

const HEADERS: [&str; 6] = ["Department", "Employees", "Average", "Highest", "Lowest", "Total"];
const NUMERIC: [usize; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SalaryView {
    pub departments: BTreeMap<String, DepartmentSalarySummary>,
}

impl SalaryView {
    fn rows(&self) -> Vec<Vec<String>> {
        self.departments
            .iter()
            .map(|(department, s)| {
                vec![
                    department.clone(),
                    s.employee_count.to_string(),
                    amount(s.average_salary),
                    amount(s.max_salary),
                    amount(s.min_salary),
                    amount(s.total_salary),
                ]
            })
            .collect()
    }
}

impl Outputter for SalaryView {
    fn to_table(&self, config: &OutputConfig) -> String {
        TableOutput::from_rows(&HEADERS, &self.rows(), &NUMERIC, config)
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &[
                "department",
                "employee_count",
                "average_salary",
                "max_salary",
                "min_salary",
                "total_salary",
            ],
            &self.rows(),
        )
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        MarkdownOutput::table(&HEADERS, &self.rows(), &NUMERIC)
    }
}

pub fn run(ctx: &Context) -> Result<()> {
    let loaded = ctx.load()?;
    let view = SalaryView {
        departments: ctx.pipeline.salary_analytics(&loaded.records),
    };
    Output::new(view, &ctx.output).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use payscope_core::{sample, AnalyticsPipeline};

    #[test]
    fn test_sample_rows() {
        let view = SalaryView {
            departments: AnalyticsPipeline::default().salary_analytics(&sample::employees()),
        };
        let csv = view.to_csv(&OutputConfig::new(OutputFormat::Csv));
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[1], "HR,1,52000,52000,52000,52000");
        assert_eq!(lines[2], "IT,2,60000,62000,58000,120000");
        assert_eq!(lines[3], "Sales,2,42000,45000,39000,84000");
    }
}
