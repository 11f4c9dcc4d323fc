//! Performance level distribution and top performers.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::stats::mean;
use crate::types::{EmployeeRecord, PerformanceLevel, Thresholds};

/// Number of records in each performance level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    #[serde(rename = "HIGH")]
    pub high: usize,
    #[serde(rename = "MEDIUM")]
    pub medium: usize,
    #[serde(rename = "LOW")]
    pub low: usize,
}

impl LevelCounts {
    pub fn add(&mut self, level: PerformanceLevel) {
        match level {
            PerformanceLevel::High => self.high += 1,
            PerformanceLevel::Medium => self.medium += 1,
            PerformanceLevel::Low => self.low += 1,
        }
    }

    pub fn get(&self, level: PerformanceLevel) -> usize {
        match level {
            PerformanceLevel::High => self.high,
            PerformanceLevel::Medium => self.medium,
            PerformanceLevel::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// One entry of the top-N ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub emp_id: String,
    pub name: String,
    pub department: String,
    pub performance_score: f64,
}

/// Performance view over the whole record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceAnalytics {
    /// Level counts per department.
    pub by_department: BTreeMap<String, LevelCounts>,
    /// Level counts across all records.
    pub level_counts: LevelCounts,
    /// Best scores first; equal scores keep input order.
    pub top_performers: Vec<TopPerformer>,
    /// Mean performance score per department.
    pub average_score_by_department: BTreeMap<String, f64>,
}

pub fn analyze(
    records: &[EmployeeRecord],
    thresholds: &Thresholds,
    top_n: usize,
) -> PerformanceAnalytics {
    let mut by_department: BTreeMap<String, LevelCounts> = BTreeMap::new();
    let mut level_counts = LevelCounts::default();
    let mut scores: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for record in records {
        let level = thresholds.classify(record.performance_score);
        by_department
            .entry(record.department.clone())
            .or_default()
            .add(level);
        level_counts.add(level);
        scores
            .entry(record.department.clone())
            .or_default()
            .push(record.performance_score);
    }

    let average_score_by_department = scores
        .into_iter()
        .filter_map(|(department, values)| mean(&values).map(|m| (department, m)))
        .collect();

    PerformanceAnalytics {
        by_department,
        level_counts,
        top_performers: top_performers(records, top_n),
        average_score_by_department,
    }
}

/// The `n` highest scores, descending. `sort_by` is stable, so ties keep input order.
///
/// `0` and `-0` compare equal here.
pub fn top_performers(records: &[EmployeeRecord], n: usize) -> Vec<TopPerformer> {
    let mut ranked: Vec<&EmployeeRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        b.performance_score
            .partial_cmp(&a.performance_score)
            .unwrap_or(Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(n)
        .map(|r| TopPerformer {
            emp_id: r.emp_id.clone(),
            name: r.name.clone(),
            department: r.department.clone(),
            performance_score: r.performance_score,
        })
        .collect()
}
