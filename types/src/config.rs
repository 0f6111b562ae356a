use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    DEFAULT_BASE_BET, DEFAULT_CASHOUT_TARGET, DEFAULT_LOSS_STREAK_THRESHOLD,
    DEFAULT_STARTING_BALANCE, MIN_CASHOUT_TARGET,
};

/// Stake adjustment rule applied after every active round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Double after a loss, reset after a win.
    #[default]
    Martingale,
    /// Double after a win, reset after a loss.
    AntiMartingale,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Martingale, Strategy::AntiMartingale];

    /// Stake for the next active round given the outcome of the current one.
    pub fn next_bet(self, current_bet: f64, base_bet: f64, won: bool) -> f64 {
        match (self, won) {
            (Strategy::Martingale, true) => base_bet,
            (Strategy::Martingale, false) => current_bet * 2.0,
            (Strategy::AntiMartingale, true) => current_bet * 2.0,
            (Strategy::AntiMartingale, false) => base_bet,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Martingale => "martingale",
            Strategy::AntiMartingale => "anti-martingale",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown strategy: {0} (expected martingale or anti-martingale)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "martingale" => Ok(Strategy::Martingale),
            "anti-martingale" => Ok(Strategy::AntiMartingale),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("cashout_target must be > 1.0 (got {value})")]
    CashoutTooLow { value: f64 },
}

/// Parameters of a single simulation run.
///
/// Missing fields fall back to their defaults when deserialized, so a partial YAML document
/// is a valid configuration source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub base_bet: f64,
    pub cashout_target: f64,
    pub starting_balance: f64,
    pub loss_streak_threshold: u32,
    pub strategy: Strategy,
    pub profit_target: Option<f64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_bet: DEFAULT_BASE_BET,
            cashout_target: DEFAULT_CASHOUT_TARGET,
            starting_balance: DEFAULT_STARTING_BALANCE,
            loss_streak_threshold: DEFAULT_LOSS_STREAK_THRESHOLD,
            strategy: Strategy::default(),
            profit_target: None,
        }
    }
}

impl SimulationConfig {
    /// Check every field and seal the configuration for use by the engine.
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        require_positive("base_bet", self.base_bet)?;
        require_positive("starting_balance", self.starting_balance)?;
        require_finite("cashout_target", self.cashout_target)?;
        if self.cashout_target <= MIN_CASHOUT_TARGET {
            return Err(ConfigError::CashoutTooLow {
                value: self.cashout_target,
            });
        }
        if let Some(target) = self.profit_target {
            require_positive("profit_target", target)?;
        }
        Ok(ValidatedConfig(self))
    }

    /// A threshold of zero turns the loss-streak pause off entirely.
    pub fn skipping_enabled(&self) -> bool {
        self.loss_streak_threshold > 0
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// A [`SimulationConfig`] that passed [`SimulationConfig::validate`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig(SimulationConfig);

impl ValidatedConfig {
    pub fn into_inner(self) -> SimulationConfig {
        self.0
    }
}

impl Deref for ValidatedConfig {
    type Target = SimulationConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
