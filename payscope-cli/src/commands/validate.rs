//! Validate command - load the dataset and report what the loader found

use anyhow::Result;
use colored::Colorize;
use payscope_core::{LoadReport, SkippedRow};
use serde::Serialize;

use super::Context;
use crate::output::{CsvOutput, MarkdownOutput, Output, OutputConfig, Outputter, TableOutput};

#[derive(Debug, Serialize)]
pub struct ValidationView {
    pub path: String,
    pub records: usize,
    pub departments: usize,
    pub skipped: Vec<SkippedRow>,
    pub has_derived_columns: bool,
    pub derived_mismatches: usize,
}

impl ValidationView {
    pub fn new(path: String, loaded: &LoadReport) -> Self {
        let mut departments: Vec<&str> = loaded
            .records
            .iter()
            .map(|r| r.department.as_str())
            .collect();
        departments.sort_unstable();
        departments.dedup();

        Self {
            path,
            records: loaded.len(),
            departments: departments.len(),
            skipped: loaded.skipped.clone(),
            has_derived_columns: loaded.has_derived_columns,
            derived_mismatches: loaded.derived_mismatches,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.derived_mismatches == 0
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("File", self.path.clone()),
            ("Records", self.records.to_string()),
            ("Departments", self.departments.to_string()),
            ("Skipped rows", self.skipped.len().to_string()),
            (
                "Derived columns",
                if self.has_derived_columns { "present" } else { "absent" }.to_string(),
            ),
            ("Derived mismatches", self.derived_mismatches.to_string()),
        ]
    }

    fn skipped_rows(&self) -> Vec<Vec<String>> {
        self.skipped
            .iter()
            .map(|s| vec![s.row.to_string(), s.missing.join(" ")])
            .collect()
    }
}

impl Outputter for ValidationView {
    fn to_table(&self, config: &OutputConfig) -> String {
        let status = match (self.is_clean(), config.use_colors()) {
            (true, true) => "VALID".green().bold().to_string(),
            (false, true) => "VALID WITH WARNINGS".yellow().bold().to_string(),
            (true, false) => "VALID".to_string(),
            (false, false) => "VALID WITH WARNINGS".to_string(),
        };

        let mut out = vec![status, TableOutput::key_value(&self.pairs(), config)];
        if !self.skipped.is_empty() {
            out.push(TableOutput::from_rows(
                &["Row", "Missing"],
                &self.skipped_rows(),
                &[0],
                config,
            ));
        }
        out.join("\n")
    }

    /// One line per skipped row.
    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(&["row", "missing"], &self.skipped_rows())
    }

    fn to_markdown(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .pairs()
            .into_iter()
            .map(|(k, v)| vec![k.to_string(), v])
            .collect();
        MarkdownOutput::table(&["Check", "Result"], &rows, &[1])
    }
}

/// Fatal data errors propagate and end the process with a non-zero status.
pub fn run(ctx: &Context) -> Result<()> {
    let loaded = ctx.load()?;
    let view = ValidationView::new(ctx.data_path.display().to_string(), &loaded);
    Output::new(view, &ctx.output).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use payscope_core::Loader;

    #[test]
    fn test_view_from_load() {
        let loaded = Loader::new()
            .load_str(
                "emp_id,name,department,salary,years_exp,performance_score\n\
                 E1,Ana,IT,50000,3,80\n\
                 E2,Ben,,40000,2,70\n\
                 E3,Cy,HR,42000,6,90\n",
            )
            .unwrap();
        let view = ValidationView::new("in.csv".to_string(), &loaded);

        assert_eq!(view.records, 2);
        assert_eq!(view.departments, 2);
        assert!(!view.is_clean());

        let csv = view.to_csv(&OutputConfig::new(OutputFormat::Csv));
        assert_eq!(csv, "row,missing\n2,department");
    }

    #[test]
    fn test_clean_table() {
        let loaded = Loader::new().load_str(payscope_core::sample::SAMPLE_CSV).unwrap();
        let view = ValidationView::new("sample".to_string(), &loaded);
        let config = OutputConfig::new(OutputFormat::Table)
            .without_colors()
            .without_wrapping();
        assert!(view.to_table(&config).starts_with("VALID\n"));
    }
}
