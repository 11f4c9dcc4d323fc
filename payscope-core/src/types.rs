//! Data model for employee records and their derived classifications.
//!
//! An [`EmployeeRecord`] is one validated row of the dataset. The derived
//! attributes ([`PerformanceLevel`], promotion eligibility) are never stored
//! on the record; they are recomputed from the raw fields with a set of
//! [`Thresholds`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One employee row as loaded from the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub emp_id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub years_exp: u32,
    pub performance_score: f64,
}

impl EmployeeRecord {
    pub fn new(
        emp_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        years_exp: u32,
        performance_score: f64,
    ) -> Self {
        Self {
            emp_id: emp_id.into(),
            name: name.into(),
            department: department.into(),
            salary,
            years_exp,
            performance_score,
        }
    }
}

/// Performance band of a record, derived from its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PerformanceLevel {
    Low,
    Medium,
    High,
}

impl PerformanceLevel {
    /// All levels, highest first.
    pub const ALL: [PerformanceLevel; 3] = [
        PerformanceLevel::High,
        PerformanceLevel::Medium,
        PerformanceLevel::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Low => "LOW",
            PerformanceLevel::Medium => "MEDIUM",
            PerformanceLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(PerformanceLevel::Low),
            "MEDIUM" => Ok(PerformanceLevel::Medium),
            "HIGH" => Ok(PerformanceLevel::High),
            other => Err(format!("Unknown performance level: '{}'", other)),
        }
    }
}

/// Cut-offs used to derive performance level and promotion eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Scores at or above this are HIGH.
    pub high: f64,
    /// Scores at or above this (and below `high`) are MEDIUM.
    pub medium: f64,
    /// Minimum years of experience for promotion.
    pub promotion_min_years: u32,
    /// Minimum performance score for promotion.
    pub promotion_min_score: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high: 85.0,
            medium: 70.0,
            promotion_min_years: 4,
            promotion_min_score: 80.0,
        }
    }
}

impl Thresholds {
    /// Classify a score. Every score maps to exactly one level.
    pub fn classify(&self, score: f64) -> PerformanceLevel {
        if score >= self.high {
            PerformanceLevel::High
        } else if score >= self.medium {
            PerformanceLevel::Medium
        } else {
            PerformanceLevel::Low
        }
    }

    pub fn is_eligible(&self, years_exp: u32, score: f64) -> bool {
        years_exp >= self.promotion_min_years && score >= self.promotion_min_score
    }

    /// Check that the cut-offs are usable: finite and `medium <= high`.
    pub fn validate(&self) -> Result<(), String> {
        if !self.high.is_finite() || !self.medium.is_finite() || !self.promotion_min_score.is_finite()
        {
            return Err("thresholds must be finite numbers".to_string());
        }
        if self.medium > self.high {
            return Err(format!(
                "medium threshold {} exceeds high threshold {}",
                self.medium, self.high
            ));
        }
        Ok(())
    }
}

/// Classify a score with the default cut-offs (HIGH >= 85, MEDIUM >= 70).
pub fn performance_level(score: f64) -> PerformanceLevel {
    Thresholds::default().classify(score)
}

/// Promotion rule with the default cut-offs (4 years and a score of 80).
pub fn is_promotion_eligible(years_exp: u32, score: f64) -> bool {
    Thresholds::default().is_eligible(years_exp, score)
}

/// A record together with its derived columns, as written to the processed file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessedRecord {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    pub performance_level: PerformanceLevel,
    pub promotion_eligible: bool,
}

impl ProcessedRecord {
    pub fn derive(record: &EmployeeRecord, thresholds: &Thresholds) -> Self {
        Self {
            record: record.clone(),
            performance_level: thresholds.classify(record.performance_score),
            promotion_eligible: thresholds.is_eligible(record.years_exp, record.performance_score),
        }
    }
}

/// Render an eligibility flag the way the processed file stores it.
pub fn eligibility_label(eligible: bool) -> &'static str {
    if eligible {
        "YES"
    } else {
        "NO"
    }
}

/// Parse a stored eligibility flag. Accepts `YES`/`NO`, `true`/`false` and `1`/`0`.
pub fn parse_eligibility(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}
