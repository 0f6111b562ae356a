//! Human-readable and JSON views over a finished run.

use std::fmt;

use crashsim_execution::{RunOutcome, SweepResult};
use crashsim_types::{RoundRecord, RunSummary, SimulationConfig};
use serde::Serialize;

use crate::export::{format_win, LEDGER_HEADER};

/// Rows shown at the bottom of the ledger by default.
pub const DEFAULT_TAIL_ROWS: usize = 10;

/// One point of the balance-over-rounds series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BalancePoint {
    pub round: u64,
    pub balance: f64,
}

pub fn balance_series(records: &[RoundRecord]) -> Vec<BalancePoint> {
    records
        .iter()
        .map(|record| BalancePoint {
            round: record.round,
            balance: record.balance,
        })
        .collect()
}

/// Last `rows` records, or all of them if the ledger is shorter.
pub fn tail(records: &[RoundRecord], rows: usize) -> &[RoundRecord] {
    &records[records.len().saturating_sub(rows)..]
}

#[derive(Clone, Debug, Serialize)]
pub struct Report<'a> {
    pub config: &'a SimulationConfig,
    pub summary: RunSummary,
    pub final_balance: f64,
    pub tail: &'a [RoundRecord],
    pub balance_series: Vec<BalancePoint>,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a SimulationConfig, outcome: &'a RunOutcome, tail_rows: usize) -> Self {
        Self {
            config,
            summary: outcome.summary(),
            final_balance: outcome.final_balance(),
            tail: tail(&outcome.records, tail_rows),
            balance_series: balance_series(&outcome.records),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>10} {:>14} {:>9} {:>5} {:>10} {:>12}  {}",
            LEDGER_HEADER[0],
            LEDGER_HEADER[1],
            LEDGER_HEADER[2],
            LEDGER_HEADER[3],
            LEDGER_HEADER[4],
            LEDGER_HEADER[5],
            LEDGER_HEADER[6],
            LEDGER_HEADER[7],
        )?;
        for record in self.tail {
            writeln!(
                f,
                "{:>6} {:>10.2} {:>14.2} {:>9.2} {:>5} {:>10.2} {:>12.2}  {}",
                record.round,
                record.bet,
                record.cashout_target,
                record.crash_at,
                format_win(record.win),
                record.profit,
                record.balance,
                record.note,
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Final Balance: ${:.2}", self.final_balance)?;
        write!(f, "{}", SummaryView(&self.summary))
    }
}

struct SummaryView<'a>(&'a RunSummary);

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(
            f,
            "Rounds: {} ({} skipped) | Wins: {} | Losses: {} | Win rate: {:.1}%",
            s.rounds,
            s.skipped,
            s.wins,
            s.losses,
            s.win_rate * 100.0
        )?;
        writeln!(
            f,
            "Net profit: {:.2} | Wagered: {:.2} | Peak: {:.2} | Max drawdown: {:.2}",
            s.net_profit, s.total_wagered, s.peak_balance, s.max_drawdown
        )?;
        writeln!(
            f,
            "Largest bet: {:.2} | Longest loss streak: {} | Stopped: {}",
            s.largest_bet, s.longest_loss_streak, s.stop_reason
        )
    }
}

/// One line per swept configuration, in sweep order.
pub fn render_sweep(results: &[SweepResult]) -> String {
    let mut out = format!(
        "{:<16} {:>8} {:>8} {:>12} {:>12} {:>9}  {}\n",
        "strategy", "target", "rounds", "net_profit", "drawdown", "win_rate", "stopped"
    );
    for result in results {
        let s = &result.summary;
        out.push_str(&format!(
            "{:<16} {:>8.2} {:>8} {:>12.2} {:>12.2} {:>8.1}%  {}\n",
            result.config.strategy.as_str(),
            result.config.cashout_target,
            s.rounds,
            s.net_profit,
            s.max_drawdown,
            s.win_rate * 100.0,
            s.stop_reason,
        ));
    }
    out
}
