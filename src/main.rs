//! Squad Battle - command line entry point
//!
//! Loads a scenario (or uses the default squads), runs one battle or a seeded
//! series, and prints the result as text or JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use squad_battle::battle::{run_scenario, run_series};
use squad_battle::core::error::Result;
use squad_battle::core::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Simulate a turn-based battle between two squads
#[derive(Parser, Debug)]
#[command(name = "squad-battle")]
#[command(about = "Simulate turn-based combat between two squads of identical fighters")]
struct Args {
    /// Scenario TOML file (defaults to two squads of 10 melee fighters)
    #[arg(long, short = 's')]
    scenario: Option<PathBuf>,

    /// Random seed for deterministic runs (overrides the scenario)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of rounds (overrides the scenario)
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Number of battles; more than one runs a seeded series in parallel
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Print only the result, not the round-by-round log
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("squad_battle=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading scenario");
            Scenario::load_from_toml(path)?
        }
        None => Scenario::default(),
    };
    if let Some(seed) = args.seed {
        scenario.battle.seed = Some(seed);
    }
    if let Some(max_rounds) = args.max_rounds {
        scenario.battle.max_rounds = max_rounds;
    }

    if args.runs > 1 {
        let summary = run_series(&scenario, args.runs)?;
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            OutputFormat::Text => println!("{}", summary.summary()),
        }
        return Ok(());
    }

    let report = run_scenario(&scenario)?;
    match args.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text if args.quiet => println!("{}", report.summary()),
        OutputFormat::Text => {
            for line in report.lines() {
                println!("{}", line);
            }
            println!("{}", report.summary());
        }
    }

    Ok(())
}
