//! Properties every analytics run must satisfy, checked on the bundled
//! sample and on a larger synthetic dataset.

use approx::assert_relative_eq;
use payscope_core::{sample, AnalyticsPipeline, EmployeeRecord, Loader, PerformanceLevel};

fn synthetic(n: usize) -> Vec<EmployeeRecord> {
    let departments = ["Sales", "HR", "IT", "Finance"];
    (0..n)
        .map(|i| {
            EmployeeRecord::new(
                format!("S{}", i),
                format!("Person {}", i),
                departments[i * 7 % departments.len()],
                20_000.0 + (i * 1_337 % 50_000) as f64,
                (i % 12) as u32,
                (i * 13 % 1001) as f64 / 10.0,
            )
        })
        .collect()
}

fn datasets() -> Vec<Vec<EmployeeRecord>> {
    vec![sample::employees(), synthetic(250), Vec::new()]
}

#[test]
fn test_headcounts_sum_to_record_count() {
    let pipeline = AnalyticsPipeline::default();
    for records in datasets() {
        let salary = pipeline.salary_analytics(&records);
        let total: usize = salary.values().map(|s| s.employee_count).sum();
        assert_eq!(total, records.len());

        let summary = pipeline.summary(&records);
        let total: usize = summary.values().map(|s| s.employee_count).sum();
        assert_eq!(total, records.len());
    }
}

#[test]
fn test_average_between_min_and_max() {
    let pipeline = AnalyticsPipeline::default();
    for records in datasets() {
        for (department, s) in pipeline.salary_analytics(&records) {
            assert!(
                s.min_salary <= s.average_salary && s.average_salary <= s.max_salary,
                "{}: {} <= {} <= {}",
                department,
                s.min_salary,
                s.average_salary,
                s.max_salary
            );
        }
    }
}

#[test]
fn test_levels_partition_records() {
    let pipeline = AnalyticsPipeline::default();
    for records in datasets() {
        let perf = pipeline.performance_analytics(&records);
        assert_eq!(perf.level_counts.total(), records.len());

        let per_department: usize = perf.by_department.values().map(|c| c.total()).sum();
        assert_eq!(per_department, records.len());
    }
}

#[test]
fn test_level_boundaries() {
    let pipeline = AnalyticsPipeline::default();
    let at = |score: f64| {
        pipeline.classify(&EmployeeRecord::new("X", "X", "X", 0.0, 0, score))
    };
    assert_eq!(at(69.9), PerformanceLevel::Low);
    assert_eq!(at(70.0), PerformanceLevel::Medium);
    assert_eq!(at(84.9), PerformanceLevel::Medium);
    assert_eq!(at(85.0), PerformanceLevel::High);
}

#[test]
fn test_sample_eligibility() {
    let promotion = AnalyticsPipeline::default().promotion_analytics(&sample::employees());
    let decisions: Vec<(&str, bool)> = promotion
        .decisions
        .iter()
        .map(|d| (d.record.name.as_str(), d.eligible))
        .collect();

    assert_eq!(
        decisions,
        vec![
            ("Ramesh", false),
            ("Sneha", true),
            ("Amit", true),
            ("Leela", false),
            ("Karan", true),
        ]
    );
}

#[test]
fn test_sample_department_averages() {
    let salary = AnalyticsPipeline::default().salary_analytics(&sample::employees());
    let departments: Vec<_> = salary.keys().cloned().collect();
    assert_eq!(departments, vec!["HR", "IT", "Sales"]);

    assert_relative_eq!(salary["HR"].average_salary, 52000.0);
    assert_relative_eq!(salary["IT"].average_salary, 60000.0);
    assert_relative_eq!(salary["Sales"].average_salary, 42000.0);
}

#[test]
fn test_sample_loads_from_text() {
    let loaded = Loader::new().load_str(sample::SAMPLE_CSV).unwrap();
    assert_eq!(loaded.records, sample::employees());
    assert!(loaded.skipped.is_empty());
    assert!(!loaded.has_derived_columns);
}

#[test]
fn test_correlation_bounds() {
    let pipeline = AnalyticsPipeline::default();
    let r = pipeline
        .insights(&synthetic(250))
        .salary_performance_correlation
        .unwrap();
    assert!((-1.0..=1.0).contains(&r));

    assert_eq!(
        pipeline
            .insights(&sample::employees()[..1])
            .salary_performance_correlation,
        None
    );
}
