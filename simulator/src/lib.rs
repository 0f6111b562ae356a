//! Local front end for the crashsim engine.
//!
//! Supplies the engine with outcomes (recorded CSV or seeded synthetic draws) and a validated
//! configuration, and turns its ledger into reports and CSV exports. All I/O lives here; the
//! engine in `crashsim-execution` stays pure.

mod export;
mod ingest;
mod report;
mod settings;
mod synthetic;

pub use export::{
    format_win, write_ledger, write_ledger_to_path, write_outcomes, DEFAULT_EXPORT_FILE,
    LEDGER_HEADER,
};
pub use ingest::{read_outcomes, read_outcomes_from_path, IngestError, MULTIPLIER_COLUMN};
pub use report::{balance_series, render_sweep, tail, BalancePoint, Report, DEFAULT_TAIL_ROWS};
pub use settings::{normalize_profit_target, Settings, SettingsError};
pub use synthetic::{
    generate, SyntheticConfig, SyntheticError, DEFAULT_SYNTHETIC_COUNT, DEFAULT_SYNTHETIC_MAX,
    DEFAULT_SYNTHETIC_MIN, DEFAULT_SYNTHETIC_SCALE, DEFAULT_SYNTHETIC_SEED,
};
