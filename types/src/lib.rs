//! Crashsim domain types.
//!
//! Defines the run configuration, the validated outcome sequence, the round ledger and the
//! run summary shared by the execution engine and the simulator front end.

mod config;
mod constants;
mod ledger;
mod outcomes;
mod summary;

pub use config::*;
pub use constants::*;
pub use ledger::*;
pub use outcomes::*;
pub use summary::*;
