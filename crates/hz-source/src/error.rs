//! Error types for loading signal tables.

use std::path::PathBuf;

use hz_core::HorizonError;
use thiserror::Error;

/// Result type alias for source operations.
pub type SourceResult<T> = core::result::Result<T, SourceError>;

/// Errors that can occur while reading or combining tables.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The table file could not be opened.
    #[error("Failed to open '{}'", .path.display())]
    Io {
        /// Resolved path of the table.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (including rows with the wrong number of fields).
    #[error("Malformed CSV")]
    Csv(#[from] csv::Error),

    /// A value cell is not a number.
    #[error("Invalid number '{value}' in column '{column}' at row {row}")]
    Parse {
        /// Zero-based data row.
        row: usize,
        /// Column label.
        column: String,
        /// Offending cell text.
        value: String,
    },

    /// Two value columns share a header.
    #[error("Duplicate column '{name}'")]
    DuplicateColumn {
        /// Repeated header text.
        name: String,
    },

    /// The header holds only the index column.
    #[error("Table has no value columns")]
    NoValueColumns,

    /// Tables or columns disagree in shape.
    #[error(transparent)]
    Shape(#[from] HorizonError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = SourceError::Parse {
            row: 4,
            column: "north".to_string(),
            value: "n/a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid number 'n/a' in column 'north' at row 4"
        );
    }

    #[test]
    fn test_duplicate_column_display() {
        let err = SourceError::DuplicateColumn {
            name: "north".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate column 'north'");
    }

    #[test]
    fn test_shape_error_is_transparent() {
        let inner = HorizonError::shape(hz_core::Dimension::Rows, "matrix rows", 3, 2);
        let err: SourceError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }
}
