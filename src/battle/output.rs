//! Battle report and its text / JSON renderings

use serde::{Deserialize, Serialize};

use crate::battle::events::{AttackOutcome, BattleEvent, BattleLog};
use crate::core::error::Result;
use crate::core::types::Winner;

/// Complete result of one battle
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleReport {
    pub squad_a: String,
    pub squad_b: String,
    pub survivors_a: usize,
    pub survivors_b: usize,
    pub winner: Winner,
    pub rounds_fought: u32,
    /// Seed the battle RNG was built from, when known
    pub seed: Option<u64>,
    pub log: BattleLog,
}

/// Counters derived from the log
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStats {
    pub attacks: u32,
    pub hits: u32,
    pub critical_hits: u32,
    pub critical_misses: u32,
    pub out_of_range: u32,
    pub kills: u32,
    pub total_damage: i64,
}

impl BattleReport {
    pub fn lines(&self) -> Vec<String> {
        self.log.lines()
    }

    pub fn stats(&self) -> BattleStats {
        let mut stats = BattleStats::default();
        for entry in &self.log.entries {
            match &entry.event {
                BattleEvent::Attack { outcome, .. } => {
                    stats.attacks += 1;
                    match outcome {
                        AttackOutcome::Hit { damage, critical } => {
                            stats.hits += 1;
                            stats.total_damage += i64::from(*damage);
                            if *critical {
                                stats.critical_hits += 1;
                            }
                        }
                        AttackOutcome::CriticalMiss => stats.critical_misses += 1,
                        AttackOutcome::Miss => {}
                    }
                }
                BattleEvent::OutOfRange { .. } => stats.out_of_range += 1,
                BattleEvent::Killed { .. } => stats.kills += 1,
                _ => {}
            }
        }
        stats
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let verdict = match self.winner {
            Winner::SquadA => format!("Squad {} wins", self.squad_a),
            Winner::SquadB => format!("Squad {} wins", self.squad_b),
            Winner::Draw => "Draw".to_string(),
        };
        let seed = self
            .seed
            .map(|s| format!(" (seed {})", s))
            .unwrap_or_default();
        format!(
            "{} after {} rounds: {} {} vs {} {}{}",
            verdict,
            self.rounds_fought,
            self.squad_a,
            self.survivors_a,
            self.squad_b,
            self.survivors_b,
            seed
        )
    }
}
