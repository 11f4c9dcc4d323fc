//! Error types for payscope-core.

use thiserror::Error;

/// Result type alias for payscope-core operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised while loading or writing employee data.
///
/// Row numbers are 1-based data rows; the header line is not counted.
#[derive(Error, Debug)]
pub enum DataError {
    /// The dataset could not be opened, read or written.
    #[error("Cannot access {path}: {source}")]
    Io {
        /// Path of the file that failed.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The delimited input is structurally broken (bad quoting, invalid UTF-8).
    #[error("Malformed delimited data: {0}")]
    Csv(#[from] csv::Error),

    /// The header contains a column outside the declared record shape.
    #[error("Unexpected column '{column}' in header")]
    SchemaMismatch {
        /// Name of the unexpected column.
        column: String,
    },

    /// A required column is absent from the header.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// A numeric field holds a value that is not a number.
    #[error("Row {row}: field '{field}' is not a number: '{value}'")]
    InvalidNumber {
        /// Data row number.
        row: usize,
        /// Field name.
        field: &'static str,
        /// Raw cell content.
        value: String,
    },

    /// A numeric field parsed but violates its declared bounds.
    #[error("Row {row}: field '{field}' value {value} is out of range ({expected})")]
    OutOfRange {
        /// Data row number.
        row: usize,
        /// Field name.
        field: &'static str,
        /// Raw cell content.
        value: String,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// Two rows share the same employee identifier.
    #[error("Row {row}: duplicate emp_id '{emp_id}' (first seen in row {first_row})")]
    DuplicateId {
        /// The repeated identifier.
        emp_id: String,
        /// Row of the first occurrence.
        first_row: usize,
        /// Row of the repeat.
        row: usize,
    },
}

impl DataError {
    /// Row number the error refers to, if it is a per-row error.
    pub fn row(&self) -> Option<usize> {
        match self {
            DataError::InvalidNumber { row, .. }
            | DataError::OutOfRange { row, .. }
            | DataError::DuplicateId { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// Whether the error comes from the file system rather than the data.
    pub fn is_io(&self) -> bool {
        match self {
            DataError::Io { .. } => true,
            DataError::Csv(e) => e.is_io_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::InvalidNumber {
            row: 3,
            field: "salary",
            value: "lots".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 3"));
        assert!(msg.contains("salary"));
        assert!(msg.contains("lots"));

        let err = DataError::DuplicateId {
            emp_id: "E101".to_string(),
            first_row: 1,
            row: 4,
        };
        assert!(err.to_string().contains("E101"));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_row_accessor() {
        let err = DataError::OutOfRange {
            row: 7,
            field: "performance_score",
            value: "120".to_string(),
            expected: "0 to 100",
        };
        assert_eq!(err.row(), Some(7));

        let err = DataError::MissingColumn {
            column: "salary".to_string(),
        };
        assert_eq!(err.row(), None);
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_classification() {
        let err = DataError::Io {
            path: "/nope.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_io());
        assert!(err.to_string().contains("/nope.csv"));
    }
}
