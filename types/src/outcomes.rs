use serde::Serialize;
use thiserror::Error;

/// Rejection of a single outcome row. Rows are 1-based.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("row {row}: multiplier must be finite (got {value})")]
    NonFinite { row: usize, value: f64 },
    #[error("row {row}: multiplier must be > 0 (got {value})")]
    NonPositive { row: usize, value: f64 },
}

/// Ordered crash multipliers, checked once at ingestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outcomes(Vec<f64>);

impl Outcomes {
    /// Validate every value, failing on the first bad row.
    pub fn new(values: Vec<f64>) -> Result<Self, InputError> {
        for (idx, &value) in values.iter().enumerate() {
            let row = idx + 1;
            if !value.is_finite() {
                return Err(InputError::NonFinite { row, value });
            }
            if value <= 0.0 {
                return Err(InputError::NonPositive { row, value });
            }
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<f64>> for Outcomes {
    type Error = InputError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
