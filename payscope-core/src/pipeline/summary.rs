//! Headcount, payroll and mean performance per department.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::EmployeeRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub employee_count: usize,
    pub total_salary: f64,
    pub average_performance: f64,
}

pub fn by_department(records: &[EmployeeRecord]) -> BTreeMap<String, DepartmentSummary> {
    let mut totals: BTreeMap<String, (usize, f64, f64)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.department.clone()).or_default();
        entry.0 += 1;
        entry.1 += record.salary;
        entry.2 += record.performance_score;
    }

    totals
        .into_iter()
        .map(|(department, (count, salary, score))| {
            (
                department,
                DepartmentSummary {
                    employee_count: count,
                    total_salary: salary,
                    average_performance: score / count as f64,
                },
            )
        })
        .collect()
}
