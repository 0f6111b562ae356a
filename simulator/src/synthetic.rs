//! Seeded synthetic outcomes for runs without recorded data.
//!
//! Values are exponential draws with mean `scale`, clipped into `[min, max]`. The same
//! configuration always yields the same sequence.

use crashsim_types::{InputError, Outcomes};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Exp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SYNTHETIC_COUNT: usize = 1_000;
pub const DEFAULT_SYNTHETIC_SCALE: f64 = 2.0;
pub const DEFAULT_SYNTHETIC_MIN: f64 = 1.01;
pub const DEFAULT_SYNTHETIC_MAX: f64 = 100.0;
pub const DEFAULT_SYNTHETIC_SEED: u64 = 42;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntheticError {
    #[error("scale must be a positive finite number (got {0})")]
    InvalidScale(f64),
    #[error("bounds must satisfy 0 < min <= max (got min={min}, max={max})")]
    InvalidBounds { min: f64, max: f64 },
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyntheticConfig {
    pub count: usize,
    /// Mean of the exponential distribution before clipping.
    pub scale: f64,
    pub min: f64,
    pub max: f64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SYNTHETIC_COUNT,
            scale: DEFAULT_SYNTHETIC_SCALE,
            min: DEFAULT_SYNTHETIC_MIN,
            max: DEFAULT_SYNTHETIC_MAX,
            seed: DEFAULT_SYNTHETIC_SEED,
        }
    }
}

impl SyntheticConfig {
    pub fn validate(&self) -> Result<(), SyntheticError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(SyntheticError::InvalidScale(self.scale));
        }
        let bounded = self.min.is_finite() && self.max.is_finite();
        if !bounded || self.min <= 0.0 || self.min > self.max {
            return Err(SyntheticError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

pub fn generate(config: &SyntheticConfig) -> Result<Outcomes, SyntheticError> {
    config.validate()?;
    let exp = Exp::new(1.0 / config.scale).map_err(|_| SyntheticError::InvalidScale(config.scale))?;
    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    let values = (0..config.count)
        .map(|_| exp.sample(&mut rng).clamp(config.min, config.max))
        .collect();
    Ok(Outcomes::new(values)?)
}
