//! Outcome ingestion from delimited text.
//!
//! Input files carry a header row; only the `Multiplier` column is read, other columns are
//! ignored. Every value is checked before the engine sees it.

use std::{fs::File, io::Read, path::Path};

use crashsim_types::{InputError, Outcomes};
use thiserror::Error;

/// Required header for the outcome column.
pub const MULTIPLIER_COLUMN: &str = "Multiplier";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv")]
    Csv(#[from] csv::Error),
    #[error("missing required column {column:?}")]
    MissingColumn { column: &'static str },
    #[error("row {row}: {value:?} is not a number")]
    Unparsable { row: usize, value: String },
    #[error(transparent)]
    Invalid(#[from] InputError),
}

/// Parse multipliers from a CSV reader. Rows are numbered from 1, excluding the header.
pub fn read_outcomes<R: Read>(reader: R) -> Result<Outcomes, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let column = reader
        .headers()?
        .iter()
        .position(|header| header == MULTIPLIER_COLUMN)
        .ok_or(IngestError::MissingColumn {
            column: MULTIPLIER_COLUMN,
        })?;

    let mut values = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;
        let raw = record.get(column).unwrap_or_default();
        let value = raw.parse::<f64>().map_err(|_| IngestError::Unparsable {
            row,
            value: raw.to_string(),
        })?;
        values.push(value);
    }

    Ok(Outcomes::new(values)?)
}

pub fn read_outcomes_from_path(path: &Path) -> Result<Outcomes, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_outcomes(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_multiplier_column() {
        let data = "Round,Multiplier\n1,2.5\n2, 1.01 \n3,14\n";
        let outcomes = read_outcomes(data.as_bytes()).unwrap();
        assert_eq!(outcomes.as_slice(), &[2.5, 1.01, 14.0]);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let data = "Multiplier,Source\n3.0,live\n1.5,live\n";
        let outcomes = read_outcomes(data.as_bytes()).unwrap();
        assert_eq!(outcomes.as_slice(), &[3.0, 1.5]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let outcomes = read_outcomes("Multiplier\n".as_bytes()).unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = read_outcomes("Round,Crash\n1,2.0\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                column: MULTIPLIER_COLUMN
            }
        ));
    }

    #[test]
    fn test_unparsable_value_reports_row() {
        let err = read_outcomes("Multiplier\n2.0\nabc\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), r#"row 2: "abc" is not a number"#);
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let err = read_outcomes("Multiplier\n2.0\n1.5\n-3\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Invalid(InputError::NonPositive { row: 3, .. })
        ));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let err = read_outcomes("Multiplier\ninf\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Invalid(InputError::NonFinite { row: 1, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_outcomes_from_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
    }
}
