//! Loader/validator for delimited employee files.
//!
//! The record shape is declared statically: the header must contain the six
//! required columns (in any order) and may contain the two derived columns
//! written by the processed-file exporter. Anything else is rejected before a
//! single row is read.
//!
//! Per-row policy:
//! - an empty or absent required cell drops the row with a warning
//! - a non-numeric value in a numeric field is fatal
//! - an out-of-range value or a repeated `emp_id` is fatal
//! - derived columns, when present, are re-derived and compared; mismatches
//!   are counted and logged but never override the raw fields

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{DataError, Result};
use crate::types::{parse_eligibility, EmployeeRecord, PerformanceLevel, Thresholds};

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "emp_id",
    "name",
    "department",
    "salary",
    "years_exp",
    "performance_score",
];

/// Columns added by the processed-file exporter. Accepted on input.
pub const DERIVED_COLUMNS: [&str; 2] = ["performance_level", "promotion_eligible"];

/// A row dropped because required cells were empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Data row number (1-based, header excluded).
    pub row: usize,
    /// Names of the required fields that were empty or absent.
    pub missing: Vec<String>,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Validated records in input order.
    pub records: Vec<EmployeeRecord>,
    /// Rows dropped for missing values.
    pub skipped: Vec<SkippedRow>,
    /// Rows whose stored derived columns disagree with the derivation.
    pub derived_mismatches: usize,
    /// Whether the input carried derived columns at all.
    pub has_derived_columns: bool,
}

impl LoadReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Positions of each declared column in the header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    emp_id: usize,
    name: usize,
    department: usize,
    salary: usize,
    years_exp: usize,
    performance_score: usize,
    performance_level: Option<usize>,
    promotion_eligible: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut seen = HashSet::new();
        for header in headers.iter() {
            if !REQUIRED_COLUMNS.contains(&header) && !DERIVED_COLUMNS.contains(&header) {
                return Err(DataError::SchemaMismatch {
                    column: header.to_string(),
                });
            }
            if !seen.insert(header) {
                return Err(DataError::SchemaMismatch {
                    column: format!("{} (repeated)", header),
                });
            }
        }

        let position = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &str| {
            position(name).ok_or_else(|| DataError::MissingColumn {
                column: name.to_string(),
            })
        };

        Ok(Self {
            emp_id: required("emp_id")?,
            name: required("name")?,
            department: required("department")?,
            salary: required("salary")?,
            years_exp: required("years_exp")?,
            performance_score: required("performance_score")?,
            performance_level: position("performance_level"),
            promotion_eligible: position("promotion_eligible"),
        })
    }

    fn required(&self) -> [(&'static str, usize); 6] {
        [
            ("emp_id", self.emp_id),
            ("name", self.name),
            ("department", self.department),
            ("salary", self.salary),
            ("years_exp", self.years_exp),
            ("performance_score", self.performance_score),
        ]
    }

    fn has_derived(&self) -> bool {
        self.performance_level.is_some() || self.promotion_eligible.is_some()
    }
}

/// Configurable loader. Immutable; one instance can serve many loads.
#[derive(Debug, Clone)]
pub struct Loader {
    delimiter: u8,
    thresholds: Thresholds,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            thresholds: Thresholds::default(),
        }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder: set the cut-offs used to check stored derived columns.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Load a dataset file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let report = self.load_reader(file)?;
        debug!(
            "Loaded {} records from {} ({} skipped)",
            report.records.len(),
            path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Load a dataset held in memory.
    pub fn load_str(&self, data: &str) -> Result<LoadReport> {
        self.load_reader(data.as_bytes())
    }

    /// Load a dataset from any reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<LoadReport> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut report = LoadReport {
            has_derived_columns: columns.has_derived(),
            ..Default::default()
        };
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = idx + 1;

            if record.len() > headers.len() {
                return Err(DataError::OutOfRange {
                    row,
                    field: "row",
                    value: format!("{} fields", record.len()),
                    expected: "no more fields than header columns",
                });
            }

            let missing: Vec<String> = columns
                .required()
                .iter()
                .filter(|(_, pos)| cell(&record, *pos).is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            if !missing.is_empty() {
                warn!("Dropping row {}: missing {}", row, missing.join(", "));
                report.skipped.push(SkippedRow { row, missing });
                continue;
            }

            let employee = self.parse_row(&record, &columns, row)?;

            if let Some(&first_row) = first_seen.get(&employee.emp_id) {
                return Err(DataError::DuplicateId {
                    emp_id: employee.emp_id,
                    first_row,
                    row,
                });
            }
            first_seen.insert(employee.emp_id.clone(), row);

            if !self.derived_columns_agree(&record, &columns, &employee) {
                warn!(
                    "Row {} ({}): stored derived columns disagree with recomputed values",
                    row, employee.emp_id
                );
                report.derived_mismatches += 1;
            }

            report.records.push(employee);
        }

        Ok(report)
    }

    fn parse_row(
        &self,
        record: &csv::StringRecord,
        columns: &ColumnIndex,
        row: usize,
    ) -> Result<EmployeeRecord> {
        // Required cells were checked for presence by the caller.
        let text = |pos: usize| cell(record, pos).unwrap_or_default();

        Ok(EmployeeRecord {
            emp_id: text(columns.emp_id).to_string(),
            name: text(columns.name).to_string(),
            department: text(columns.department).to_string(),
            salary: parse_salary(row, text(columns.salary))?,
            years_exp: parse_years(row, text(columns.years_exp))?,
            performance_score: parse_score(row, text(columns.performance_score))?,
        })
    }

    fn derived_columns_agree(
        &self,
        record: &csv::StringRecord,
        columns: &ColumnIndex,
        employee: &EmployeeRecord,
    ) -> bool {
        let level_ok = columns
            .performance_level
            .and_then(|pos| cell(record, pos))
            .map_or(true, |raw| {
                raw.parse::<PerformanceLevel>().ok()
                    == Some(self.thresholds.classify(employee.performance_score))
            });

        let eligible_ok = columns
            .promotion_eligible
            .and_then(|pos| cell(record, pos))
            .map_or(true, |raw| {
                parse_eligibility(raw)
                    == Some(
                        self.thresholds
                            .is_eligible(employee.years_exp, employee.performance_score),
                    )
            });

        level_ok && eligible_ok
    }
}

/// Non-empty cell at `pos`, if any.
fn cell(record: &csv::StringRecord, pos: usize) -> Option<&str> {
    record.get(pos).filter(|value| !value.is_empty())
}

fn parse_salary(row: usize, raw: &str) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|_| DataError::InvalidNumber {
        row,
        field: "salary",
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(DataError::OutOfRange {
            row,
            field: "salary",
            value: raw.to_string(),
            expected: "a finite non-negative amount",
        });
    }
    // Adding zero turns -0 into 0.
    Ok(value + 0.0)
}

fn parse_years(row: usize, raw: &str) -> Result<u32> {
    let out_of_range = || DataError::OutOfRange {
        row,
        field: "years_exp",
        value: raw.to_string(),
        expected: "a non-negative whole number",
    };

    if let Ok(value) = raw.parse::<i64>() {
        return u32::try_from(value).map_err(|_| out_of_range());
    }

    // Spreadsheet exports often write whole numbers as "4.0".
    let value: f64 = raw.parse().map_err(|_| DataError::InvalidNumber {
        row,
        field: "years_exp",
        value: raw.to_string(),
    })?;
    if value.is_finite() && value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(out_of_range())
    }
}

fn parse_score(row: usize, raw: &str) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|_| DataError::InvalidNumber {
        row,
        field: "performance_score",
        value: raw.to_string(),
    })?;
    if !(0.0..=100.0).contains(&value) {
        return Err(DataError::OutOfRange {
            row,
            field: "performance_score",
            value: raw.to_string(),
            expected: "0 to 100",
        });
    }
    Ok(value + 0.0)
}

/// Load a comma-delimited file with default settings.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    Loader::default().load_path(path)
}

/// Load comma-delimited data from a string with default settings.
pub fn load_str(data: &str) -> Result<LoadReport> {
    Loader::default().load_str(data)
}
