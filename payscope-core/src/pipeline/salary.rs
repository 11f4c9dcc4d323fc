//! Salary aggregates per department.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::EmployeeRecord;

/// Salary statistics for one department.
///
/// Extremes are reported as values only; several employees may share them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSalarySummary {
    pub average_salary: f64,
    pub max_salary: f64,
    pub min_salary: f64,
    pub employee_count: usize,
    pub total_salary: f64,
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    total: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn push(&mut self, salary: f64) {
        if self.count == 0 {
            self.min = salary;
            self.max = salary;
        } else {
            self.min = self.min.min(salary);
            self.max = self.max.max(salary);
        }
        self.count += 1;
        self.total += salary;
    }

    fn finish(self) -> DepartmentSalarySummary {
        // Clamp guards against the mean drifting past an extreme through rounding.
        let average = (self.total / self.count as f64)
            .max(self.min)
            .min(self.max);
        DepartmentSalarySummary {
            average_salary: average,
            max_salary: self.max,
            min_salary: self.min,
            employee_count: self.count,
            total_salary: self.total,
        }
    }
}

/// Group records by department and aggregate their salaries.
pub fn by_department(records: &[EmployeeRecord]) -> BTreeMap<String, DepartmentSalarySummary> {
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.department.clone())
            .or_default()
            .push(record.salary);
    }

    groups
        .into_iter()
        .map(|(department, acc)| (department, acc.finish()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_sample_departments() {
        let salary = by_department(&sample::employees());

        assert_eq!(salary.len(), 3);
        assert_eq!(salary["HR"].average_salary, 52000.0);
        assert_eq!(salary["IT"].average_salary, 60000.0);
        assert_eq!(salary["Sales"].average_salary, 42000.0);

        let it = &salary["IT"];
        assert_eq!(it.max_salary, 62000.0);
        assert_eq!(it.min_salary, 58000.0);
        assert_eq!(it.employee_count, 2);
        assert_eq!(it.total_salary, 120000.0);
    }

    #[test]
    fn test_shared_extremes() {
        let records = vec![
            EmployeeRecord::new("A", "A", "Ops", 100.0, 1, 50.0),
            EmployeeRecord::new("B", "B", "Ops", 100.0, 1, 50.0),
        ];
        let ops = &by_department(&records)["Ops"];
        assert_eq!(ops.max_salary, 100.0);
        assert_eq!(ops.min_salary, 100.0);
        assert_eq!(ops.average_salary, 100.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(by_department(&[]).is_empty());
    }
}
