use std::fmt;

use serde::{Deserialize, Serialize};

use super::SKIP_NOTE;

/// One row of the run ledger. Exactly one record exists per consumed outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based position in the outcome sequence.
    pub round: u64,
    /// Stake placed; zero when the round was skipped.
    pub bet: f64,
    pub cashout_target: f64,
    pub crash_at: f64,
    /// `None` for rounds observed without a wager.
    pub win: Option<bool>,
    pub profit: f64,
    /// Balance after the round settled.
    pub balance: f64,
    pub note: String,
}

impl RoundRecord {
    /// A round observed while the loss-streak pause is active.
    pub fn skipped(round: u64, cashout_target: f64, crash_at: f64, balance: f64) -> Self {
        Self {
            round,
            bet: 0.0,
            cashout_target,
            crash_at,
            win: None,
            profit: 0.0,
            balance,
            note: SKIP_NOTE.to_string(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.win.is_none()
    }

    pub fn is_win(&self) -> bool {
        self.win == Some(true)
    }
}

/// Why a run stopped consuming outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// Every outcome was consumed.
    #[default]
    Exhausted,
    /// Cumulative profit had reached the target before the next round.
    ProfitTarget,
    /// Balance fell to zero or below.
    Ruin,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => f.write_str("input exhausted"),
            Self::ProfitTarget => f.write_str("profit target reached"),
            Self::Ruin => f.write_str("ruin"),
        }
    }
}
