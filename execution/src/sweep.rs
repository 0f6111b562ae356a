//! Independent runs of several configurations against one outcome sequence.
//!
//! Every configuration gets its own [`RunState`](crate::RunState); nothing is shared between
//! runs except the read-only outcomes. With the `parallel` feature the runs execute on the
//! rayon global pool. Results keep the order of the input configurations either way.

use crashsim_types::{
    ConfigError, Outcomes, RunSummary, SimulationConfig, Strategy, ValidatedConfig,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::run;

/// Summary of one configuration in a sweep.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepResult {
    pub config: ValidatedConfig,
    pub summary: RunSummary,
}

/// Build the cartesian product of cashout targets and strategies over a base configuration.
///
/// Fails on the first combination that does not validate.
pub fn grid(
    base: &SimulationConfig,
    cashout_targets: &[f64],
    strategies: &[Strategy],
) -> Result<Vec<ValidatedConfig>, ConfigError> {
    let mut configs = Vec::with_capacity(cashout_targets.len() * strategies.len());
    for &cashout_target in cashout_targets {
        for &strategy in strategies {
            let config = SimulationConfig {
                cashout_target,
                strategy,
                ..base.clone()
            };
            configs.push(config.validate()?);
        }
    }
    Ok(configs)
}

fn evaluate(outcomes: &Outcomes, config: &ValidatedConfig) -> SweepResult {
    SweepResult {
        config: config.clone(),
        summary: run(outcomes, config).summary(),
    }
}

pub fn sweep(outcomes: &Outcomes, configs: &[ValidatedConfig]) -> Vec<SweepResult> {
    info!(
        configs = configs.len(),
        rounds = outcomes.len(),
        "starting sweep"
    );

    #[cfg(feature = "parallel")]
    let results = configs
        .par_iter()
        .map(|config| evaluate(outcomes, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = configs
        .iter()
        .map(|config| evaluate(outcomes, config))
        .collect();

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{create_config, create_cycle};

    #[test]
    fn test_grid_is_cartesian_product() {
        let configs = grid(
            &SimulationConfig::default(),
            &[1.5, 2.0, 3.0],
            &Strategy::ALL,
        )
        .unwrap();
        assert_eq!(configs.len(), 6);
        assert_eq!(configs[0].cashout_target, 1.5);
        assert_eq!(configs[0].strategy, Strategy::Martingale);
        assert_eq!(configs[1].strategy, Strategy::AntiMartingale);
        assert_eq!(configs[5].cashout_target, 3.0);
    }

    #[test]
    fn test_grid_rejects_invalid_target() {
        let err = grid(&SimulationConfig::default(), &[2.0, 0.9], &[Strategy::Martingale])
            .unwrap_err();
        assert_eq!(err, ConfigError::CashoutTooLow { value: 0.9 });
    }

    #[test]
    fn test_sweep_matches_individual_runs() {
        let outcomes = create_cycle(300);
        let configs = grid(&SimulationConfig::default(), &[1.3, 2.0, 2.5], &Strategy::ALL).unwrap();
        let results = sweep(&outcomes, &configs);

        assert_eq!(results.len(), configs.len());
        for (result, config) in results.iter().zip(&configs) {
            assert_eq!(&result.config, config);
            assert_eq!(result.summary, run(&outcomes, config).summary());
        }
    }

    #[test]
    fn test_sweep_runs_are_independent() {
        let outcomes = create_cycle(120);
        let config = create_config(SimulationConfig::default());
        let results = sweep(&outcomes, &[config.clone(), config.clone(), config]);
        assert_eq!(results[0].summary, results[1].summary);
        assert_eq!(results[1].summary, results[2].summary);
    }

    #[test]
    fn test_empty_sweep() {
        assert!(sweep(&create_cycle(10), &[]).is_empty());
    }
}
