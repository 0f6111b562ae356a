//! YAML configuration files.
//!
//! ```yaml
//! simulation:
//!   base_bet: 5
//!   strategy: anti-martingale
//!   profit_target: 200
//! synthetic:
//!   seed: 7
//! ```
//!
//! Every section and field is optional; omitted values keep their defaults.

use std::path::Path;

use crashsim_types::SimulationConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SyntheticConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub synthetic: SyntheticConfig,
}

impl Settings {
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        let mut settings: Settings = serde_yaml::from_str(contents)?;
        settings.simulation.profit_target =
            normalize_profit_target(settings.simulation.profit_target);
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// A profit target of exactly zero means "no target".
pub fn normalize_profit_target(target: Option<f64>) -> Option<f64> {
    target.filter(|&value| value != 0.0)
}
