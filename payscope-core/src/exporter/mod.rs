//! Exporters for processed records and analytics reports.
//!
//! - `csv`: the processed dataset (input columns plus derived columns)
//! - `json`: the full [`AnalyticsReport`](crate::AnalyticsReport)
//! - `markdown`: a human-readable report document

pub mod csv;
pub mod json;
pub mod markdown;

/// Render an amount without a trailing `.0` when it is a whole number.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(45000.0), "45000");
        assert_eq!(format_number(40000.5), "40000.5");
        assert_eq!(format_number(0.0), "0");
    }
}
