use crashsim_types::SimulationConfig;
use serde::Serialize;

/// Mutable bookkeeping for a single run.
///
/// A fresh value is created from the configuration at the start of every run; nothing carries
/// over between runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RunState {
    pub balance: f64,
    /// Stake for the next active round.
    pub current_bet: f64,
    /// Consecutive losses since the last win. Counts down by one per skipped round.
    pub loss_streak: u32,
    /// Number of outcomes consumed so far. The next record is `round_index + 1`.
    pub round_index: u64,
}

impl RunState {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            balance: config.starting_balance,
            current_bet: config.base_bet,
            loss_streak: 0,
            round_index: 0,
        }
    }

    /// Profit relative to the starting balance.
    pub fn profit(&self, config: &SimulationConfig) -> f64 {
        self.balance - config.starting_balance
    }

    pub fn profit_target_reached(&self, config: &SimulationConfig) -> bool {
        config
            .profit_target
            .is_some_and(|target| self.profit(config) >= target)
    }

    /// Whether the upcoming round is observed without a wager.
    pub fn should_skip(&self, config: &SimulationConfig) -> bool {
        config.skipping_enabled() && self.loss_streak >= config.loss_streak_threshold
    }

    /// A balance that is not positive, including `NaN` from an overflowed stake, ends the run.
    pub fn is_ruined(&self) -> bool {
        self.balance.is_nan() || self.balance <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_from_config() {
        let config = SimulationConfig {
            base_bet: 5.0,
            starting_balance: 250.0,
            ..Default::default()
        };
        let state = RunState::new(&config);
        assert_eq!(state.balance, 250.0);
        assert_eq!(state.current_bet, 5.0);
        assert_eq!(state.loss_streak, 0);
        assert_eq!(state.round_index, 0);
        assert_eq!(state.profit(&config), 0.0);
    }

    #[test]
    fn test_profit_target_reached() {
        let config = SimulationConfig {
            profit_target: Some(50.0),
            ..Default::default()
        };
        let mut state = RunState::new(&config);
        assert!(!state.profit_target_reached(&config));
        state.balance = 1_049.0;
        assert!(!state.profit_target_reached(&config));
        state.balance = 1_050.0;
        assert!(state.profit_target_reached(&config));

        let unset = SimulationConfig::default();
        state.balance = 1_000_000.0;
        assert!(!state.profit_target_reached(&unset));
    }

    #[test]
    fn test_should_skip_respects_threshold() {
        let config = SimulationConfig {
            loss_streak_threshold: 2,
            ..Default::default()
        };
        let mut state = RunState::new(&config);
        state.loss_streak = 1;
        assert!(!state.should_skip(&config));
        state.loss_streak = 2;
        assert!(state.should_skip(&config));
    }

    #[test]
    fn test_zero_threshold_never_skips() {
        let config = SimulationConfig {
            loss_streak_threshold: 0,
            ..Default::default()
        };
        let mut state = RunState::new(&config);
        assert!(!state.should_skip(&config));
        state.loss_streak = 10;
        assert!(!state.should_skip(&config));
    }

    #[test]
    fn test_ruin_includes_zero_balance() {
        let mut state = RunState::new(&SimulationConfig::default());
        state.balance = 0.0;
        assert!(state.is_ruined());
        state.balance = 0.01;
        assert!(!state.is_ruined());
    }

    #[test]
    fn test_nan_balance_is_ruin() {
        let mut state = RunState::new(&SimulationConfig::default());
        state.balance = f64::INFINITY - f64::INFINITY;
        assert!(state.is_ruined());
        state.balance = f64::INFINITY;
        assert!(!state.is_ruined());
    }
}
