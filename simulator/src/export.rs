//! CSV writers for the run ledger and for generated outcome files.

use std::{fs::File, io::Write, path::Path};

use crashsim_types::{Outcomes, RoundRecord};

use crate::ingest::MULTIPLIER_COLUMN;

/// Ledger columns, in export order.
pub const LEDGER_HEADER: [&str; 8] = [
    "Round",
    "Bet",
    "Cashout_Target",
    "Crash_At",
    "Win",
    "Profit",
    "Balance",
    "Note",
];

/// File name offered when no export path is given.
pub const DEFAULT_EXPORT_FILE: &str = "aviator_bot_results.csv";

/// `True`/`False` for settled rounds, empty for skipped ones.
pub fn format_win(win: Option<bool>) -> &'static str {
    match win {
        Some(true) => "True",
        Some(false) => "False",
        None => "",
    }
}

pub fn write_ledger<W: Write>(writer: W, records: &[RoundRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(LEDGER_HEADER)?;
    for record in records {
        writer.write_record([
            record.round.to_string().as_str(),
            record.bet.to_string().as_str(),
            record.cashout_target.to_string().as_str(),
            record.crash_at.to_string().as_str(),
            format_win(record.win),
            record.profit.to_string().as_str(),
            record.balance.to_string().as_str(),
            record.note.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_ledger_to_path(path: &Path, records: &[RoundRecord]) -> Result<(), csv::Error> {
    write_ledger(File::create(path)?, records)
}

/// Write outcomes as a two-column `Round,Multiplier` file readable by [`crate::read_outcomes`].
pub fn write_outcomes<W: Write>(writer: W, outcomes: &Outcomes) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["Round", MULTIPLIER_COLUMN])?;
    for (idx, value) in outcomes.as_slice().iter().enumerate() {
        writer.write_record([(idx + 1).to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
