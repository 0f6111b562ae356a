//! Round-by-round betting engine.
//!
//! The engine is a fold over the outcome sequence. [`step`] settles exactly one round and is
//! pure; [`Simulation`] wraps it with the stop conditions and drives it one outcome at a time;
//! [`run`] drains a [`Simulation`] into a full ledger.
//!
//! ## Round order
//!
//! 1. If the input is exhausted, stop.
//! 2. If a profit target is set and already reached, stop without consuming the outcome.
//! 3. If the loss-streak pause is active, record the outcome without a wager and decay the
//!    streak by one.
//! 4. Otherwise settle the wager: a crash at or above the cashout target wins
//!    `bet * (target - 1)`, anything lower loses the stake.
//! 5. If the balance is at or below zero, or is `NaN` after an overflowed stake, stop after
//!    recording the round.

use crashsim_types::{
    Outcomes, RoundRecord, RunSummary, SimulationConfig, StopReason, ValidatedConfig,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::RunState;

/// Settle one outcome against the current state.
///
/// Returns the next state and the ledger row for this round. Stop conditions are not checked
/// here; see [`Simulation::next_round`].
pub fn step(
    state: &RunState,
    config: &SimulationConfig,
    crash_at: f64,
) -> (RunState, RoundRecord) {
    let round = state.round_index + 1;

    if state.should_skip(config) {
        let next = RunState {
            loss_streak: state.loss_streak - 1,
            round_index: round,
            ..*state
        };
        let record = RoundRecord::skipped(round, config.cashout_target, crash_at, state.balance);
        return (next, record);
    }

    let bet = state.current_bet;
    let won = crash_at >= config.cashout_target;
    let profit = if won {
        bet * (config.cashout_target - 1.0)
    } else {
        -bet
    };
    let next = RunState {
        balance: state.balance + profit,
        current_bet: config.strategy.next_bet(bet, config.base_bet, won),
        loss_streak: if won {
            0
        } else {
            state.loss_streak.saturating_add(1)
        },
        round_index: round,
    };
    let record = RoundRecord {
        round,
        bet,
        cashout_target: config.cashout_target,
        crash_at,
        win: Some(won),
        profit,
        balance: next.balance,
        note: String::new(),
    };
    (next, record)
}

/// Incremental driver over a validated outcome sequence.
///
/// Each call to [`Simulation::next_round`] consumes at most one outcome. Once a stop condition
/// fires the simulation is finished and yields nothing further.
#[derive(Clone, Debug)]
pub struct Simulation<'a> {
    config: &'a ValidatedConfig,
    outcomes: &'a [f64],
    state: RunState,
    stop_reason: Option<StopReason>,
}

impl<'a> Simulation<'a> {
    pub fn new(config: &'a ValidatedConfig, outcomes: &'a Outcomes) -> Self {
        Self {
            config,
            outcomes: outcomes.as_slice(),
            state: RunState::new(config),
            stop_reason: None,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// `None` while the simulation can still produce rounds.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn is_finished(&self) -> bool {
        self.stop_reason.is_some()
    }

    pub fn next_round(&mut self) -> Option<RoundRecord> {
        if self.stop_reason.is_some() {
            return None;
        }

        let Some(&crash_at) = self.outcomes.get(self.state.round_index as usize) else {
            self.stop_reason = Some(StopReason::Exhausted);
            return None;
        };

        if self.state.profit_target_reached(self.config) {
            debug!(
                round = self.state.round_index + 1,
                profit = self.state.profit(self.config),
                "profit target reached"
            );
            self.stop_reason = Some(StopReason::ProfitTarget);
            return None;
        }

        let (next, record) = step(&self.state, self.config, crash_at);
        self.state = next;
        debug!(
            round = record.round,
            bet = record.bet,
            crash_at = record.crash_at,
            win = ?record.win,
            profit = record.profit,
            balance = record.balance,
            loss_streak = self.state.loss_streak,
            "settled round"
        );

        if self.state.is_ruined() {
            debug!(round = record.round, balance = record.balance, "ruined");
            self.stop_reason = Some(StopReason::Ruin);
        }
        Some(record)
    }
}

impl Iterator for Simulation<'_> {
    type Item = RoundRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_round()
    }
}

/// Everything a finished run produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunOutcome {
    pub starting_balance: f64,
    pub records: Vec<RoundRecord>,
    pub final_state: RunState,
    pub stop_reason: StopReason,
}

impl RunOutcome {
    pub fn final_balance(&self) -> f64 {
        self.final_state.balance
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::from_ledger(self.starting_balance, &self.records, self.stop_reason)
    }
}

/// Run a full simulation from a fresh state.
pub fn run(outcomes: &Outcomes, config: &ValidatedConfig) -> RunOutcome {
    let mut simulation = Simulation::new(config, outcomes);
    let mut records = Vec::with_capacity(outcomes.len());
    while let Some(record) = simulation.next_round() {
        records.push(record);
    }

    let final_state = *simulation.state();
    let stop_reason = simulation.stop_reason().unwrap_or_default();
    info!(
        strategy = %config.strategy,
        rounds = records.len(),
        final_balance = final_state.balance,
        stop_reason = %stop_reason,
        "simulation finished"
    );

    RunOutcome {
        starting_balance: config.starting_balance,
        records,
        final_state,
        stop_reason,
    }
}
