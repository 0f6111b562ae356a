use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crashsim_execution::{grid, run, sweep};
use crashsim_simulator::{
    generate, normalize_profit_target, read_outcomes_from_path, render_sweep,
    write_ledger_to_path, write_outcomes, Report, Settings, SyntheticConfig, DEFAULT_EXPORT_FILE,
    DEFAULT_TAIL_ROWS,
};
use crashsim_types::{Outcomes, SimulationConfig, Strategy, ValidatedConfig};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay crash multipliers against a staking strategy")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one configuration and print the tail of the ledger.
    Run(RunArgs),
    /// Simulate a grid of cashout targets and strategies over the same outcomes.
    Sweep(SweepArgs),
    /// Write synthetic multipliers to a CSV file.
    Generate(GenerateArgs),
}

/// Simulation parameters. Flags override values from `--config`, which override defaults.
#[derive(clap::Args, Debug, Default)]
struct ConfigArgs {
    /// YAML file with optional `simulation` and `synthetic` sections.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    base_bet: Option<f64>,

    #[arg(long)]
    cashout_target: Option<f64>,

    #[arg(long)]
    starting_balance: Option<f64>,

    /// Skip rounds after this many consecutive losses (0 disables skipping).
    #[arg(long)]
    loss_streak_threshold: Option<u32>,

    /// martingale or anti-martingale.
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Stop once cumulative profit reaches this amount (0 means no target).
    #[arg(long)]
    profit_target: Option<f64>,
}

impl ConfigArgs {
    fn apply(&self, mut config: SimulationConfig) -> SimulationConfig {
        if let Some(value) = self.base_bet {
            config.base_bet = value;
        }
        if let Some(value) = self.cashout_target {
            config.cashout_target = value;
        }
        if let Some(value) = self.starting_balance {
            config.starting_balance = value;
        }
        if let Some(value) = self.loss_streak_threshold {
            config.loss_streak_threshold = value;
        }
        if let Some(value) = self.strategy {
            config.strategy = value;
        }
        if self.profit_target.is_some() {
            config.profit_target = normalize_profit_target(self.profit_target);
        }
        config
    }
}

#[derive(clap::Args, Debug, Default)]
struct SyntheticArgs {
    /// Number of synthetic rounds.
    #[arg(long)]
    synthetic_count: Option<usize>,

    /// Mean of the exponential draw before clipping.
    #[arg(long)]
    synthetic_scale: Option<f64>,

    #[arg(long)]
    synthetic_min: Option<f64>,

    #[arg(long)]
    synthetic_max: Option<f64>,

    /// Seed for synthetic outcomes.
    #[arg(long)]
    seed: Option<u64>,
}

impl SyntheticArgs {
    fn apply(&self, mut config: SyntheticConfig) -> SyntheticConfig {
        if let Some(value) = self.synthetic_count {
            config.count = value;
        }
        if let Some(value) = self.synthetic_scale {
            config.scale = value;
        }
        if let Some(value) = self.synthetic_min {
            config.min = value;
        }
        if let Some(value) = self.synthetic_max {
            config.max = value;
        }
        if let Some(value) = self.seed {
            config.seed = value;
        }
        config
    }
}

#[derive(clap::Args, Debug, Default)]
struct DataArgs {
    /// CSV file with a `Multiplier` column. Synthetic outcomes are used when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    #[command(flatten)]
    synthetic: SyntheticArgs,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    data: DataArgs,

    /// Write the full ledger as CSV.
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
    export: Option<PathBuf>,

    /// Ledger rows to print.
    #[arg(long, default_value_t = DEFAULT_TAIL_ROWS)]
    tail: usize,

    /// Print the report as JSON, including the balance series.
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct SweepArgs {
    /// Base parameters. `--cashout-target` and `--strategy` are replaced by the grid.
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    data: DataArgs,

    #[arg(long, value_delimiter = ',', default_values_t = [1.5, 2.0, 3.0])]
    cashout_targets: Vec<f64>,

    #[arg(long, value_delimiter = ',', default_values_t = Strategy::ALL)]
    strategies: Vec<Strategy>,

    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// YAML file; only the `synthetic` section is used.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    synthetic: SyntheticArgs,

    #[arg(short, long, default_value = "multipliers.csv")]
    output: PathBuf,
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Ok(Settings::load(path)?),
        None => Ok(Settings::default()),
    }
}

fn build_config(
    args: &ConfigArgs,
    synthetic: &SyntheticArgs,
) -> Result<(ValidatedConfig, SyntheticConfig)> {
    let settings = load_settings(args.config.as_deref())?;
    let config = args
        .apply(settings.simulation)
        .validate()
        .context("invalid simulation config")?;
    let synthetic = synthetic.apply(settings.synthetic);
    synthetic
        .validate()
        .context("invalid synthetic data config")?;
    Ok((config, synthetic))
}

fn load_outcomes(data: Option<&Path>, synthetic: &SyntheticConfig) -> Result<Outcomes> {
    let outcomes = match data {
        Some(path) => {
            let outcomes = read_outcomes_from_path(path)
                .with_context(|| format!("failed to load outcomes from {}", path.display()))?;
            info!(path = %path.display(), rounds = outcomes.len(), "loaded outcomes");
            outcomes
        }
        None => {
            let outcomes = generate(synthetic).context("failed to generate outcomes")?;
            info!(
                rounds = outcomes.len(),
                seed = synthetic.seed,
                "no data file given, using synthetic outcomes"
            );
            outcomes
        }
    };
    Ok(outcomes)
}

fn cmd_run(args: &RunArgs) -> Result<()> {
    let (config, synthetic) = build_config(&args.config, &args.data.synthetic)?;
    let outcomes = load_outcomes(args.data.data.as_deref(), &synthetic)?;
    let outcome = run(&outcomes, &config);

    if let Some(path) = &args.export {
        write_ledger_to_path(path, &outcome.records)
            .with_context(|| format!("failed to export ledger to {}", path.display()))?;
        info!(path = %path.display(), rows = outcome.records.len(), "exported ledger");
    }

    let report = Report::new(&config, &outcome, args.tail);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn cmd_sweep(args: &SweepArgs) -> Result<()> {
    let (base, synthetic) = build_config(&args.config, &args.data.synthetic)?;
    let configs = grid(&base, &args.cashout_targets, &args.strategies)
        .context("invalid sweep grid")?;
    let outcomes = load_outcomes(args.data.data.as_deref(), &synthetic)?;
    let results = sweep(&outcomes, &configs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render_sweep(&results));
    }
    Ok(())
}

fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let synthetic = args.synthetic.apply(settings.synthetic);
    let outcomes = generate(&synthetic).context("failed to generate outcomes")?;
    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_outcomes(file, &outcomes)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        rounds = outcomes.len(),
        seed = synthetic.seed,
        "wrote synthetic outcomes"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    match &args.command {
        Command::Run(args) => cmd_run(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Generate(args) => cmd_generate(args),
    }
}
