//! Salary versus performance insights.

use serde::Serialize;
use std::collections::BTreeMap;

use super::stats::{mean, pearson};
use crate::types::EmployeeRecord;

/// Correlation between pay and performance, plus per-department mean scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationInsight {
    /// Pearson coefficient; `None` (JSON `null`) when undefined.
    pub salary_performance_correlation: Option<f64>,
    pub average_performance_by_department: BTreeMap<String, f64>,
    pub record_count: usize,
}

impl CorrelationInsight {
    /// Coarse reading of the coefficient for reports.
    pub fn strength(&self) -> &'static str {
        match self.salary_performance_correlation {
            None => "undefined",
            Some(r) if r.abs() >= 0.7 => "strong",
            Some(r) if r.abs() >= 0.4 => "moderate",
            Some(r) if r.abs() >= 0.1 => "weak",
            Some(_) => "negligible",
        }
    }
}

pub fn analyze(records: &[EmployeeRecord]) -> CorrelationInsight {
    let salaries: Vec<f64> = records.iter().map(|r| r.salary).collect();
    let scores: Vec<f64> = records.iter().map(|r| r.performance_score).collect();

    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.department.clone())
            .or_default()
            .push(record.performance_score);
    }

    CorrelationInsight {
        salary_performance_correlation: pearson(&salaries, &scores),
        average_performance_by_department: grouped
            .into_iter()
            .filter_map(|(department, values)| mean(&values).map(|m| (department, m)))
            .collect(),
        record_count: records.len(),
    }
}
