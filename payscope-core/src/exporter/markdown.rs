//! Markdown report exporter.

use chrono::{DateTime, Utc};

use super::format_number;
use crate::pipeline::AnalyticsReport;
use crate::types::PerformanceLevel;

const TITLE: &str = "Employee Salary & Performance Analytics Report";

/// Export a report to Markdown.
///
/// `generated_at` is printed under the title when given; leaving it out keeps
/// the output a pure function of the report.
pub fn export(report: &AnalyticsReport, generated_at: Option<DateTime<Utc>>) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {}", TITLE));
    lines.push(String::new());
    if let Some(ts) = generated_at {
        lines.push(format!("_Generated {}_", ts.format("%Y-%m-%d %H:%M UTC")));
        lines.push(String::new());
    }

    export_overview(report, &mut lines);
    export_salary(report, &mut lines);
    export_performance(report, &mut lines);
    export_promotion(report, &mut lines);
    export_insights(report, &mut lines);
    export_summary(report, &mut lines);

    lines.join("\n")
}

/// Correlation to two decimals, or "undefined".
pub fn format_correlation(value: Option<f64>) -> String {
    value
        .map(|r| format!("{:.2}", r))
        .unwrap_or_else(|| "undefined".to_string())
}

fn export_overview(report: &AnalyticsReport, lines: &mut Vec<String>) {
    lines.push("## Executive Summary".to_string());
    lines.push(String::new());
    lines.push(format!(
        "- **Employees:** {} across {} departments",
        report.record_count,
        report.summary.len()
    ));
    lines.push(format!(
        "- **Total salary expense:** {}",
        format_number(report.total_salary())
    ));
    lines.push(format!(
        "- **Eligible for promotion:** {}",
        report.promotion.eligible_count
    ));
    lines.push(format!(
        "- **Salary/performance correlation:** {} ({})",
        format_correlation(report.insights.salary_performance_correlation),
        report.insights.strength()
    ));
    lines.push(String::new());
}

fn export_salary(report: &AnalyticsReport, lines: &mut Vec<String>) {
    lines.push("## Salary Analytics".to_string());
    lines.push(String::new());
    if report.salary.is_empty() {
        lines.push("_No records._".to_string());
        lines.push(String::new());
        return;
    }

    lines.push("| Department | Employees | Average | Highest | Lowest | Total |".to_string());
    lines.push("|---|---:|---:|---:|---:|---:|".to_string());
    for (department, s) in &report.salary {
        lines.push(format!(
            "| {} | {} | {:.2} | {} | {} | {} |",
            escape_cell(department),
            s.employee_count,
            s.average_salary,
            format_number(s.max_salary),
            format_number(s.min_salary),
            format_number(s.total_salary)
        ));
    }
    lines.push(String::new());
}

fn export_performance(report: &AnalyticsReport, lines: &mut Vec<String>) {
    let perf = &report.performance;
    lines.push("## Performance Analytics".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Levels: HIGH >= {}, MEDIUM >= {}, LOW below.",
        report.thresholds.high, report.thresholds.medium
    ));
    lines.push(String::new());

    lines.push("| Level | Employees |".to_string());
    lines.push("|---|---:|".to_string());
    for level in PerformanceLevel::ALL {
        lines.push(format!("| {} | {} |", level, perf.level_counts.get(level)));
    }
    lines.push(String::new());

    if !perf.by_department.is_empty() {
        lines.push("### By Department".to_string());
        lines.push(String::new());
        lines.push("| Department | HIGH | MEDIUM | LOW |".to_string());
        lines.push("|---|---:|---:|---:|".to_string());
        for (department, counts) in &perf.by_department {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                escape_cell(department),
                counts.high,
                counts.medium,
                counts.low
            ));
        }
        lines.push(String::new());
    }

    if !perf.top_performers.is_empty() {
        lines.push(format!("### Top {} Performers", perf.top_performers.len()));
        lines.push(String::new());
        for (rank, top) in perf.top_performers.iter().enumerate() {
            lines.push(format!(
                "{}. **{}** ({}) - {}",
                rank + 1,
                top.name,
                top.department,
                format_number(top.performance_score)
            ));
        }
        lines.push(String::new());
    }
}

fn export_promotion(report: &AnalyticsReport, lines: &mut Vec<String>) {
    lines.push("## Promotion Eligibility".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Rule: at least {} years of experience and a performance score of {} or more.",
        report.thresholds.promotion_min_years, report.thresholds.promotion_min_score
    ));
    lines.push(String::new());

    let eligible: Vec<_> = report.promotion.eligible().collect();
    if eligible.is_empty() {
        lines.push("_No employees currently qualify._".to_string());
    } else {
        for record in eligible {
            lines.push(format!(
                "- {} ({}, {} years, score {})",
                record.name,
                record.department,
                record.years_exp,
                format_number(record.performance_score)
            ));
        }
    }
    lines.push(String::new());
}

fn export_insights(report: &AnalyticsReport, lines: &mut Vec<String>) {
    let insights = &report.insights;
    lines.push("## Salary vs Performance".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Correlation between salary and performance score: **{}** ({}).",
        format_correlation(insights.salary_performance_correlation),
        insights.strength()
    ));
    lines.push(String::new());

    if !insights.average_performance_by_department.is_empty() {
        lines.push("| Department | Average Performance |".to_string());
        lines.push("|---|---:|".to_string());
        for (department, avg) in &insights.average_performance_by_department {
            lines.push(format!("| {} | {:.2} |", escape_cell(department), avg));
        }
        lines.push(String::new());
    }
}

fn export_summary(report: &AnalyticsReport, lines: &mut Vec<String>) {
    lines.push("## Department Summary".to_string());
    lines.push(String::new());
    if report.summary.is_empty() {
        lines.push("_No records._".to_string());
        return;
    }

    lines.push("| Department | Employees | Total Salary | Average Performance |".to_string());
    lines.push("|---|---:|---:|---:|".to_string());
    for (department, s) in &report.summary {
        lines.push(format!(
            "| {} | {} | {} | {:.2} |",
            escape_cell(department),
            s.employee_count,
            format_number(s.total_salary),
            s.average_performance
        ));
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
