//! Aggregation pipeline: derived views over a validated record set.
//!
//! Every view is a pure function of the full record slice. Nothing is cached
//! and the input is never mutated, so one [`AnalyticsPipeline`] can be built
//! at startup and shared by any number of callers.
//!
//! # Views
//!
//! | Operation                | Result                                         |
//! |--------------------------|------------------------------------------------|
//! | `salary_analytics`       | department -> [`DepartmentSalarySummary`]      |
//! | `performance_analytics`  | [`PerformanceAnalytics`] (levels, top-N)       |
//! | `promotion_analytics`    | [`PromotionAnalytics`] (record, eligible)      |
//! | `insights`               | [`CorrelationInsight`]                         |
//! | `summary`                | department -> [`DepartmentSummary`]            |

use serde::Serialize;
use std::collections::BTreeMap;

pub mod insights;
pub mod performance;
pub mod promotion;
pub mod salary;
pub mod stats;
pub mod summary;

pub use insights::CorrelationInsight;
pub use performance::{LevelCounts, PerformanceAnalytics, TopPerformer};
pub use promotion::{PromotionAnalytics, PromotionDecision};
pub use salary::DepartmentSalarySummary;
pub use summary::DepartmentSummary;

use crate::types::{EmployeeRecord, PerformanceLevel, ProcessedRecord, Thresholds};

/// Default size of the top performer ranking.
pub const DEFAULT_TOP_N: usize = 3;

/// Immutable analytics configuration plus the view operations.
#[derive(Debug, Clone)]
pub struct AnalyticsPipeline {
    thresholds: Thresholds,
    top_n: usize,
}

impl Default for AnalyticsPipeline {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalyticsPipeline {
    pub fn new(thresholds: Thresholds, top_n: usize) -> Self {
        Self { thresholds, top_n }
    }

    /// Builder: change the top performer ranking size.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn classify(&self, record: &EmployeeRecord) -> PerformanceLevel {
        self.thresholds.classify(record.performance_score)
    }

    pub fn is_eligible(&self, record: &EmployeeRecord) -> bool {
        self.thresholds
            .is_eligible(record.years_exp, record.performance_score)
    }

    /// Attach derived columns to every record, keeping input order.
    pub fn process(&self, records: &[EmployeeRecord]) -> Vec<ProcessedRecord> {
        records
            .iter()
            .map(|r| ProcessedRecord::derive(r, &self.thresholds))
            .collect()
    }

    pub fn salary_analytics(
        &self,
        records: &[EmployeeRecord],
    ) -> BTreeMap<String, DepartmentSalarySummary> {
        salary::by_department(records)
    }

    pub fn performance_analytics(&self, records: &[EmployeeRecord]) -> PerformanceAnalytics {
        performance::analyze(records, &self.thresholds, self.top_n)
    }

    /// Same as [`performance_analytics`](Self::performance_analytics) with a
    /// per-call ranking size.
    pub fn performance_analytics_top(
        &self,
        records: &[EmployeeRecord],
        top_n: usize,
    ) -> PerformanceAnalytics {
        performance::analyze(records, &self.thresholds, top_n)
    }

    pub fn promotion_analytics(&self, records: &[EmployeeRecord]) -> PromotionAnalytics {
        promotion::analyze(records, &self.thresholds)
    }

    pub fn insights(&self, records: &[EmployeeRecord]) -> CorrelationInsight {
        insights::analyze(records)
    }

    pub fn summary(&self, records: &[EmployeeRecord]) -> BTreeMap<String, DepartmentSummary> {
        summary::by_department(records)
    }

    /// Compute every view at once.
    pub fn run(&self, records: &[EmployeeRecord]) -> AnalyticsReport {
        AnalyticsReport {
            record_count: records.len(),
            thresholds: self.thresholds,
            salary: self.salary_analytics(records),
            performance: self.performance_analytics(records),
            promotion: self.promotion_analytics(records),
            insights: self.insights(records),
            summary: self.summary(records),
        }
    }
}

/// All derived views of one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub record_count: usize,
    pub thresholds: Thresholds,
    pub salary: BTreeMap<String, DepartmentSalarySummary>,
    pub performance: PerformanceAnalytics,
    pub promotion: PromotionAnalytics,
    pub insights: CorrelationInsight,
    pub summary: BTreeMap<String, DepartmentSummary>,
}

impl AnalyticsReport {
    pub fn total_salary(&self) -> f64 {
        self.summary.values().map(|s| s.total_salary).sum()
    }
}
