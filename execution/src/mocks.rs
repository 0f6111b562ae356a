//! Fixtures for tests that need validated inputs without repeating validation boilerplate.

use crashsim_types::{Outcomes, SimulationConfig, ValidatedConfig};

/// Validates a configuration, panicking on invalid test fixtures.
pub fn create_config(config: SimulationConfig) -> ValidatedConfig {
    config.validate().expect("test config should be valid")
}

/// Wraps raw multipliers, panicking on invalid test fixtures.
pub fn create_outcomes(values: &[f64]) -> Outcomes {
    Outcomes::new(values.to_vec()).expect("test outcomes should be valid")
}

/// Repeats an eight-round pattern whose three opening losses trip the default loss-streak
/// pause. Under the default martingale configuration each cycle nets +30.
pub fn create_cycle(len: usize) -> Outcomes {
    const PATTERN: [f64; 8] = [1.1, 1.4, 1.05, 3.2, 2.6, 1.9, 2.2, 5.0];
    create_outcomes(&PATTERN.iter().copied().cycle().take(len).collect::<Vec<_>>())
}
