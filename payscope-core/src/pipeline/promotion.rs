//! Promotion eligibility per record.

use serde::Serialize;

use crate::types::{EmployeeRecord, Thresholds};

/// A record paired with its eligibility decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionDecision {
    #[serde(flatten)]
    pub record: EmployeeRecord,
    pub eligible: bool,
}

/// Eligibility of every record, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionAnalytics {
    pub decisions: Vec<PromotionDecision>,
    pub eligible_count: usize,
    pub ineligible_count: usize,
}

impl PromotionAnalytics {
    /// Records that qualify, in input order.
    pub fn eligible(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.decisions
            .iter()
            .filter(|d| d.eligible)
            .map(|d| &d.record)
    }
}

pub fn analyze(records: &[EmployeeRecord], thresholds: &Thresholds) -> PromotionAnalytics {
    let decisions: Vec<PromotionDecision> = records
        .iter()
        .map(|record| PromotionDecision {
            record: record.clone(),
            eligible: thresholds.is_eligible(record.years_exp, record.performance_score),
        })
        .collect();

    let eligible_count = decisions.iter().filter(|d| d.eligible).count();
    PromotionAnalytics {
        ineligible_count: decisions.len() - eligible_count,
        eligible_count,
        decisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_sample_eligibility() {
        let promo = analyze(&sample::employees(), &Thresholds::default());

        let by_name: Vec<(&str, bool)> = promo
            .decisions
            .iter()
            .map(|d| (d.record.name.as_str(), d.eligible))
            .collect();
        assert_eq!(
            by_name,
            vec![
                ("Ramesh", false),
                ("Sneha", true),
                ("Amit", true),
                ("Leela", false),
                ("Karan", true),
            ]
        );
        assert_eq!(promo.eligible_count, 3);
        assert_eq!(promo.ineligible_count, 2);

        let eligible: Vec<_> = promo.eligible().map(|r| r.emp_id.as_str()).collect();
        assert_eq!(eligible, vec!["E102", "E103", "E105"]);
    }

    #[test]
    fn test_decision_serializes_flat() {
        let promo = analyze(&sample::employees()[..1], &Thresholds::default());
        let json = serde_json::to_value(&promo.decisions[0]).unwrap();
        assert_eq!(json["name"], "Ramesh");
        assert_eq!(json["eligible"], false);
    }
}
