//! Employees command - list every record with its derived columns

use anyhow::Result;
use payscope_core::exporter::csv as processed_csv;
use payscope_core::ProcessedRecord;
use serde::Serialize;

use super::Context;
use crate::output::{
    amount, eligibility_label, level_label, MarkdownOutput, Output, OutputConfig, Outputter,
    TableOutput,
};

const HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Department",
    "Salary",
    "Years",
    "Score",
    "Level",
    "Promotion",
];

/// Records in input order with performance level and eligibility attached.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EmployeesView {
    pub records: Vec<ProcessedRecord>,
    /// Delimiter of the CSV rendering, matching the configured dataset
    #[serde(skip)]
    pub delimiter: u8,
}

impl EmployeesView {
    pub fn new(records: Vec<ProcessedRecord>, delimiter: u8) -> Self {
        Self { records, delimiter }
    }

    fn rows(&self, config: &OutputConfig) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|p| {
                let r = &p.record;
                vec![
                    r.emp_id.clone(),
                    r.name.clone(),
                    r.department.clone(),
                    amount(r.salary),
                    r.years_exp.to_string(),
                    amount(r.performance_score),
                    level_label(p.performance_level, config),
                    eligibility_label(p.promotion_eligible, config),
                ]
            })
            .collect()
    }
}

impl Outputter for EmployeesView {
    fn to_table(&self, config: &OutputConfig) -> String {
        TableOutput::from_rows(&HEADERS, &self.rows(config), &[3, 4, 5], config)
    }

    /// The processed file itself, so the output loads back with the same config.
    fn to_csv(&self, _config: &OutputConfig) -> String {
        match processed_csv::to_string(&self.records, self.delimiter) {
            Ok(text) => text.trim_end_matches('\n').to_string(),
            Err(e) => format!("error: {}", e),
        }
    }

    fn to_markdown(&self, config: &OutputConfig) -> String {
        let plain = config.clone().without_colors();
        MarkdownOutput::table(&HEADERS, &self.rows(&plain), &[3, 4, 5])
    }
}

pub fn run(ctx: &Context) -> Result<()> {
    let loaded = ctx.load()?;
    let view = EmployeesView::new(ctx.pipeline.process(&loaded.records), ctx.delimiter);
    Output::new(view, &ctx.output).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use payscope_core::{sample, AnalyticsPipeline};

    fn view() -> EmployeesView {
        EmployeesView::new(
            AnalyticsPipeline::default().process(&sample::employees()),
            b',',
        )
    }

    #[test]
    fn test_csv_matches_processed_layout() {
        let config = OutputConfig::new(OutputFormat::Csv);
        let output = view().to_csv(&config);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], processed_csv::output_columns().join(","));
        assert_eq!(lines[1], "E101,Ramesh,Sales,45000,3,78,MEDIUM,NO");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_csv_uses_dataset_delimiter() {
        let mut view = view();
        view.delimiter = b';';
        view.records[0].record.name = "Ramesh; Jr".to_string();
        let output = view.to_csv(&OutputConfig::new(OutputFormat::Csv));

        let loaded = payscope_core::Loader::new()
            .with_delimiter(b';')
            .load_str(&output)
            .unwrap();
        assert_eq!(loaded.len(), 5);
        assert_eq!(loaded.records[0].name, "Ramesh; Jr");
        assert_eq!(loaded.derived_mismatches, 0);
    }

    #[test]
    fn test_table_contains_levels() {
        let config = OutputConfig::new(OutputFormat::Table)
            .without_colors()
            .without_wrapping();
        let output = view().to_table(&config);

        assert!(output.contains("Amit"));
        assert!(output.contains("HIGH"));
        assert!(output.contains("YES"));
    }

    #[test]
    fn test_json_is_a_list() {
        let config = OutputConfig::new(OutputFormat::Json).compact();
        let output = view().to_json(&config);
        assert!(output.starts_with('['));
        assert!(output.contains("\"performance_level\":\"HIGH\""));
    }
}
