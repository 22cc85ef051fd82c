//! Many seeded battles of the same scenario, run in parallel

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::battle::engine::run_scenario;
use crate::core::config::Scenario;
use crate::core::error::{Result, SimError};
use crate::core::types::Winner;

/// Aggregate outcome of a battle series
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub runs: u32,
    /// Battle `i` used seed `base_seed + i`
    pub base_seed: u64,
    pub wins_a: u32,
    pub wins_b: u32,
    pub draws: u32,
    pub mean_survivors_a: f64,
    pub mean_survivors_b: f64,
    pub mean_rounds: f64,
}

impl SeriesSummary {
    pub fn win_rate_a(&self) -> f64 {
        self.wins_a as f64 / self.runs as f64
    }

    pub fn win_rate_b(&self) -> f64 {
        self.wins_b as f64 / self.runs as f64
    }

    pub fn summary(&self) -> String {
        format!(
            "{} battles (seeds {}..{}): A won {} ({:.1}%), B won {} ({:.1}%), {} draws; \
             mean survivors {:.1} vs {:.1}, mean rounds {:.1}",
            self.runs,
            self.base_seed,
            self.base_seed.wrapping_add(self.runs as u64),
            self.wins_a,
            self.win_rate_a() * 100.0,
            self.wins_b,
            self.win_rate_b() * 100.0,
            self.draws,
            self.mean_survivors_a,
            self.mean_survivors_b,
            self.mean_rounds,
        )
    }
}

struct RunResult {
    winner: Winner,
    survivors_a: usize,
    survivors_b: usize,
    rounds: u32,
}

/// Run `runs` independent battles. Each battle gets its own squads and RNG.
pub fn run_series(scenario: &Scenario, runs: u32) -> Result<SeriesSummary> {
    if runs == 0 {
        return Err(SimError::InvalidConfig("a series needs at least one run".into()));
    }
    scenario.validate()?;

    let base_seed = scenario.battle.seed.unwrap_or_else(rand::random);
    tracing::info!(runs, base_seed, "Starting battle series");

    let results = (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut run = scenario.clone();
            run.battle.seed = Some(base_seed.wrapping_add(u64::from(i)));
            run_scenario(&run).map(|report| RunResult {
                winner: report.winner,
                survivors_a: report.survivors_a,
                survivors_b: report.survivors_b,
                rounds: report.rounds_fought,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut summary = SeriesSummary {
        runs,
        base_seed,
        wins_a: 0,
        wins_b: 0,
        draws: 0,
        mean_survivors_a: 0.0,
        mean_survivors_b: 0.0,
        mean_rounds: 0.0,
    };

    for result in &results {
        match result.winner {
            Winner::SquadA => summary.wins_a += 1,
            Winner::SquadB => summary.wins_b += 1,
            Winner::Draw => summary.draws += 1,
        }
        summary.mean_survivors_a += result.survivors_a as f64;
        summary.mean_survivors_b += result.survivors_b as f64;
        summary.mean_rounds += f64::from(result.rounds);
    }

    let n = f64::from(runs);
    summary.mean_survivors_a /= n;
    summary.mean_survivors_b /= n;
    summary.mean_rounds /= n;

    Ok(summary)
}
