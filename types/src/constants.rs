/// Default reset stake.
pub const DEFAULT_BASE_BET: f64 = 10.0;

/// Default cashout multiplier (2x).
pub const DEFAULT_CASHOUT_TARGET: f64 = 2.0;

/// Default starting funds.
pub const DEFAULT_STARTING_BALANCE: f64 = 1_000.0;

/// Consecutive losses before rounds are skipped (0 disables skipping).
pub const DEFAULT_LOSS_STREAK_THRESHOLD: u32 = 3;

/// Lowest cashout target that can still pay out. Targets at or below this are rejected.
pub const MIN_CASHOUT_TARGET: f64 = 1.0;

/// Note attached to rounds observed without a wager.
pub const SKIP_NOTE: &str = "Skipped due to loss streak";
