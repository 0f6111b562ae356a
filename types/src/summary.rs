use serde::{Deserialize, Serialize};

use super::{RoundRecord, StopReason};

/// Aggregate statistics over a finished run's ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub rounds: u64,
    pub skipped: u64,
    pub wins: u64,
    pub losses: u64,
    /// Wins over active (non-skipped) rounds; zero when nothing was wagered.
    pub win_rate: f64,
    pub total_wagered: f64,
    pub net_profit: f64,
    pub final_balance: f64,
    pub peak_balance: f64,
    /// Largest fall from a running balance peak, measured from the starting balance onward.
    pub max_drawdown: f64,
    pub largest_bet: f64,
    /// Longest run of consecutive losing wagers. Skipped rounds neither extend nor break it.
    pub longest_loss_streak: u64,
    pub stop_reason: StopReason,
}

impl RunSummary {
    pub fn from_ledger(
        starting_balance: f64,
        records: &[RoundRecord],
        stop_reason: StopReason,
    ) -> Self {
        let mut summary = Self {
            rounds: records.len() as u64,
            skipped: 0,
            wins: 0,
            losses: 0,
            win_rate: 0.0,
            total_wagered: 0.0,
            net_profit: 0.0,
            final_balance: starting_balance,
            peak_balance: starting_balance,
            max_drawdown: 0.0,
            largest_bet: 0.0,
            longest_loss_streak: 0,
            stop_reason,
        };

        let mut streak = 0u64;
        for record in records {
            match record.win {
                None => summary.skipped += 1,
                Some(true) => {
                    summary.wins += 1;
                    streak = 0;
                }
                Some(false) => {
                    summary.losses += 1;
                    streak += 1;
                    summary.longest_loss_streak = summary.longest_loss_streak.max(streak);
                }
            }
            summary.total_wagered += record.bet;
            summary.largest_bet = summary.largest_bet.max(record.bet);
            summary.peak_balance = summary.peak_balance.max(record.balance);
            summary.max_drawdown = summary
                .max_drawdown
                .max(summary.peak_balance - record.balance);
            summary.final_balance = record.balance;
        }

        let active = summary.wins + summary.losses;
        if active > 0 {
            summary.win_rate = summary.wins as f64 / active as f64;
        }
        summary.net_profit = summary.final_balance - starting_balance;
        summary
    }
}
