//! Crashsim execution layer.
//!
//! This crate contains the deterministic betting engine used by the simulator front end.
//!
//! ## Determinism requirements
//! - The engine performs no I/O and reads no clock or randomness.
//! - A run depends only on its configuration and the outcome sequence; two runs with the same
//!   inputs produce identical ledgers.
//! - Runs share no mutable state, so independent configurations may execute concurrently.
//!
//! ## Minimal run (example)
//! ```rust
//! use crashsim_execution::run;
//! use crashsim_types::{Outcomes, SimulationConfig, StopReason};
//!
//! let config = SimulationConfig::default().validate().unwrap();
//! let outcomes = Outcomes::new(vec![3.0, 1.5, 2.5]).unwrap();
//! let outcome = run(&outcomes, &config);
//! assert_eq!(outcome.final_balance(), 1_020.0);
//! assert_eq!(outcome.stop_reason, StopReason::Exhausted);
//! ```

pub mod engine;
pub mod sweep;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

mod state;

pub use engine::{run, step, RunOutcome, Simulation};
pub use state::RunState;
pub use sweep::{grid, sweep, SweepResult};
