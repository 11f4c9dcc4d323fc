//! JSON format exporter.

use crate::pipeline::AnalyticsReport;

/// Export a report to JSON.
pub fn export(report: &AnalyticsReport, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample, AnalyticsPipeline};

    #[test]
    fn test_export_json() {
        let report = AnalyticsPipeline::default().run(&sample::employees());
        let output = export(&report, false).unwrap();
        assert!(output.contains("\"record_count\":5"));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_export_json_pretty() {
        let report = AnalyticsPipeline::default().run(&[]);
        let output = export(&report, true).unwrap();
        assert!(output.contains('\n'));
        assert!(output.contains("\"salary_performance_correlation\": null"));
    }
}
