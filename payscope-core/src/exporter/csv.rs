//! Processed-file writer.
//!
//! Columns mirror the input file followed by `performance_level` and
//! `promotion_eligible` (`YES`/`NO`). Rows keep input order, so loading the
//! file back and re-deriving reproduces the same derived columns.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::format_number;
use crate::error::{DataError, Result};
use crate::loader::{DERIVED_COLUMNS, REQUIRED_COLUMNS};
use crate::types::{eligibility_label, ProcessedRecord};

/// Header of the processed file.
pub fn output_columns() -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .chain(DERIVED_COLUMNS.iter())
        .copied()
        .collect()
}

/// Write processed records to any writer.
pub fn write_processed<W: Write>(
    records: &[ProcessedRecord],
    writer: W,
    delimiter: u8,
) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    out.write_record(output_columns())?;
    for processed in records {
        let r = &processed.record;
        let salary = format_number(r.salary);
        let years = r.years_exp.to_string();
        let score = format_number(r.performance_score);
        out.write_record([
            r.emp_id.as_str(),
            r.name.as_str(),
            r.department.as_str(),
            salary.as_str(),
            years.as_str(),
            score.as_str(),
            processed.performance_level.as_str(),
            eligibility_label(processed.promotion_eligible),
        ])?;
    }
    out.flush().map_err(|source| DataError::Io {
        path: "<output>".to_string(),
        source,
    })?;
    Ok(())
}

/// Write processed records to a file, replacing it.
pub fn write_processed_file<P: AsRef<Path>>(
    path: P,
    records: &[ProcessedRecord],
    delimiter: u8,
) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| DataError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    write_processed(records, file, delimiter)?;
    tracing::info!("Wrote {} processed records to {}", records.len(), path.display());
    Ok(())
}

/// Render processed records as a string.
pub fn to_string(records: &[ProcessedRecord], delimiter: u8) -> Result<String> {
    let mut buffer = Vec::new();
    write_processed(records, &mut buffer, delimiter)?;
    // csv only writes the UTF-8 we hand it.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample, AnalyticsPipeline};

    #[test]
    fn test_processed_output() {
        let processed = AnalyticsPipeline::default().process(&sample::employees());
        let text = to_string(&processed, b',').unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "emp_id,name,department,salary,years_exp,performance_score,performance_level,promotion_eligible"
        );
        assert_eq!(lines[1], "E101,Ramesh,Sales,45000,3,78,MEDIUM,NO");
        assert_eq!(lines[3], "E103,Amit,IT,62000,7,92,HIGH,YES");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_quotes_special_values() {
        let rec = crate::EmployeeRecord::new("E9", "Doe, Jane", "R&D", 1.5, 0, 10.0);
        let processed = AnalyticsPipeline::default().process(&[rec]);
        let text = to_string(&processed, b',').unwrap();
        assert!(text.contains("\"Doe, Jane\""));
        assert!(text.contains("1.5"));
    }

    #[test]
    fn test_empty_writes_header_only() {
        let text = to_string(&[], b';').unwrap();
        assert_eq!(text.trim_end(), output_columns().join(";"));
    }
}
