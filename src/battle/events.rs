//! Battle log: typed events, rendered into human-readable lines on demand

use serde::{Deserialize, Serialize};

use crate::combat::combatant::AttackRoll;
use crate::core::types::Winner;

const BANNER_WIDTH: usize = 50;

/// What happened when an attacker rolled against a defender in reach
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Natural 1
    CriticalMiss,
    Miss,
    Hit { damage: i32, critical: bool },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    BattleStarted,
    RoundStarted {
        squad_a: String,
        size_a: usize,
        squad_b: String,
        size_b: usize,
        forced_engage: bool,
    },
    OutOfRange {
        attacker: String,
        defender: String,
        distance: f64,
    },
    Attack {
        attacker: String,
        defender: String,
        roll: AttackRoll,
        outcome: AttackOutcome,
    },
    Killed {
        combatant: String,
    },
    RoundEnded {
        squad_a: String,
        average_a: f64,
        retreat_limit_a: bool,
        squad_b: String,
        average_b: f64,
        retreat_limit_b: bool,
    },
    BattleEnded {
        squad_a: String,
        survivors_a: usize,
        squad_b: String,
        survivors_b: usize,
        winner: Winner,
    },
}

/// An event stamped with the round it happened in (0 outside of rounds)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub round: u32,
    pub event: BattleEvent,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BattleLog {
    pub entries: Vec<LogEntry>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: u32, event: BattleEvent) {
        self.entries.push(LogEntry { round, event });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn events_for_round(&self, round: u32) -> impl Iterator<Item = &BattleEvent> {
        self.entries
            .iter()
            .filter(move |e| e.round == round)
            .map(|e| &e.event)
    }

    /// Number of rounds that produced a round header
    pub fn rounds_logged(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.event, BattleEvent::RoundStarted { .. }))
            .count()
    }

    /// Per-round forced-engagement flags, in round order
    pub fn forced_engage_history(&self) -> Vec<bool> {
        self.entries
            .iter()
            .filter_map(|e| match e.event {
                BattleEvent::RoundStarted { forced_engage, .. } => Some(forced_engage),
                _ => None,
            })
            .collect()
    }

    /// Render the whole log as display lines
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for entry in &self.entries {
            render(entry, &mut lines);
        }
        lines
    }
}

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

fn render(entry: &LogEntry, out: &mut Vec<String>) {
    match &entry.event {
        BattleEvent::BattleStarted => {
            out.push(String::new());
            out.push(banner());
            out.push("BATTLE SIMULATION START".to_string());
            out.push(banner());
            out.push(String::new());
        }
        BattleEvent::RoundStarted {
            squad_a,
            size_a,
            squad_b,
            size_b,
            ..
        } => {
            let header = format!(
                "Round {}: {}[{}] vs {}[{}]",
                entry.round, squad_a, size_a, squad_b, size_b
            );
            let underline = "-".repeat(header.chars().count());
            out.push(header);
            out.push(underline);
        }
        BattleEvent::OutOfRange {
            attacker,
            defender,
            distance,
        } => {
            out.push(format!(
                "  {} cannot attack {} (distance: {:.1} ft)",
                attacker, defender, distance
            ));
        }
        BattleEvent::Attack {
            attacker,
            defender,
            outcome,
            ..
        } => {
            let result = match outcome {
                AttackOutcome::CriticalMiss => "Critical miss!".to_string(),
                AttackOutcome::Miss => "Miss!".to_string(),
                AttackOutcome::Hit { damage, critical } => {
                    if *critical {
                        format!("Hit! Damage: {} | Crit!", damage)
                    } else {
                        format!("Hit! Damage: {}", damage)
                    }
                }
            };
            out.push(format!("  {} -> {}: {}", attacker, defender, result));
        }
        BattleEvent::Killed { combatant } => {
            out.push(format!("  {} KILLED!", combatant));
        }
        BattleEvent::RoundEnded {
            squad_a,
            average_a,
            retreat_limit_a,
            squad_b,
            average_b,
            retreat_limit_b,
        } => {
            out.push(format!(
                "Positions: {} at {:.1}, {} at {:.1}",
                squad_a, average_a, squad_b, average_b
            ));
            out.push(format!(
                "Retreat limit: {}[{}] {}[{}]",
                squad_a, retreat_limit_a, squad_b, retreat_limit_b
            ));
            out.push(String::new());
        }
        BattleEvent::BattleEnded {
            squad_a,
            survivors_a,
            squad_b,
            survivors_b,
            winner,
        } => {
            out.push(banner());
            out.push("BATTLE RESULT:".to_string());
            out.push(banner());
            out.push(format!("Squad {}: {} survivors", squad_a, survivors_a));
            out.push(format!("Squad {}: {} survivors", squad_b, survivors_b));
            out.push(match winner {
                Winner::SquadA => format!("WINNER: SQUAD {}", squad_a),
                Winner::SquadB => format!("WINNER: SQUAD {}", squad_b),
                Winner::Draw => "DRAW!".to_string(),
            });
            out.push(banner());
        }
    }
}
