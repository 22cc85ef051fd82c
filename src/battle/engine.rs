//! Round-based battle engine
//!
//! Each round: cleanup, shuffle, movement, then two attack phases (A hits B,
//! then B hits A). The loop ends when a squad is empty or the round cap is hit.
//!
//! Liveness is only re-checked at the start of a round. Within a round a
//! fighter killed earlier can still be picked as the nearest defender, and a
//! fighter killed in the first phase still takes its turn in the second.
//!
//! One RNG drives both sides, so mirrored squads can still end unevenly; a
//! given seed always replays the same battle.

use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::battle::events::{AttackOutcome, BattleEvent, BattleLog};
use crate::battle::output::BattleReport;
use crate::combat::combatant::{AttackRoll, Combatant};
use crate::combat::factory::create_squad;
use crate::combat::squad::Squad;
use crate::core::config::Scenario;
use crate::core::error::Result;
use crate::core::types::Winner;

/// Roll an attack and apply any damage to the defender
pub fn resolve_attack<R: Rng + ?Sized>(
    attacker: &Combatant,
    defender: &mut Combatant,
    rng: &mut R,
) -> (AttackRoll, AttackOutcome) {
    let roll = attacker.roll_attack(rng);

    let outcome = if roll.is_critical_miss() {
        AttackOutcome::CriticalMiss
    } else if roll.total >= defender.stats.armor_class || roll.is_critical_hit() {
        let critical = roll.is_critical_hit();
        let damage = attacker.roll_damage(critical, rng);
        defender.take_damage(damage);
        AttackOutcome::Hit { damage, critical }
    } else {
        AttackOutcome::Miss
    };

    (roll, outcome)
}

/// Index of the closest member of `defenders`; ties go to the earliest in
/// the current order. Dead-but-not-removed members are candidates.
pub fn nearest_defender(attacker: &Combatant, defenders: &Squad) -> Option<usize> {
    defenders
        .fighters
        .iter()
        .enumerate()
        .min_by_key(|(_, defender)| OrderedFloat(attacker.distance_to(defender)))
        .map(|(index, _)| index)
}

fn attack_phase<R: Rng + ?Sized>(
    round: u32,
    attackers: &Squad,
    defenders: &mut Squad,
    log: &mut BattleLog,
    rng: &mut R,
) {
    for attacker in &attackers.fighters {
        let Some(index) = nearest_defender(attacker, defenders) else {
            break;
        };
        let defender = &mut defenders.fighters[index];

        if !attacker.can_attack(defender) {
            log.push(
                round,
                BattleEvent::OutOfRange {
                    attacker: attacker.id.clone(),
                    defender: defender.id.clone(),
                    distance: attacker.distance_to(defender),
                },
            );
            continue;
        }

        let (roll, outcome) = resolve_attack(attacker, defender, rng);
        let hit = matches!(outcome, AttackOutcome::Hit { .. });
        tracing::trace!(
            attacker = %attacker.id,
            defender = %defender.id,
            raw = roll.raw,
            total = roll.total,
            ?outcome,
            "Attack resolved"
        );

        log.push(
            round,
            BattleEvent::Attack {
                attacker: attacker.id.clone(),
                defender: defender.id.clone(),
                roll,
                outcome,
            },
        );

        if hit && !defender.is_alive() {
            log.push(
                round,
                BattleEvent::Killed {
                    combatant: defender.id.clone(),
                },
            );
        }
    }
}

/// Run a battle to completion, mutating both squads in place
pub fn simulate_battle<R: Rng + ?Sized>(
    squad_a: &mut Squad,
    squad_b: &mut Squad,
    max_rounds: u32,
    rng: &mut R,
) -> BattleReport {
    let mut log = BattleLog::new();
    log.push(0, BattleEvent::BattleStarted);

    let mut round = 1;
    let mut rounds_fought = 0;

    while !squad_a.is_empty() && !squad_b.is_empty() && round <= max_rounds {
        // 1. Cleanup
        squad_a.remove_dead();
        squad_b.remove_dead();
        if squad_a.is_empty() || squad_b.is_empty() {
            break;
        }

        // 2. Shuffle
        squad_a.shuffle(rng);
        squad_b.shuffle(rng);

        // 3. Forced engagement, from this round's counters
        let forced_engage = squad_a.max_retreat_reached() || squad_b.max_retreat_reached();

        log.push(
            round,
            BattleEvent::RoundStarted {
                squad_a: squad_a.name.clone(),
                size_a: squad_a.size(),
                squad_b: squad_b.name.clone(),
                size_b: squad_b.size(),
                forced_engage,
            },
        );

        // 4-5. Movement toward the other squad's pre-movement average
        let average_a = squad_a.average_position();
        let average_b = squad_b.average_position();
        for fighter in &mut squad_a.fighters {
            fighter.move_towards(average_b, forced_engage);
        }
        for fighter in &mut squad_b.fighters {
            fighter.move_towards(average_a, forced_engage);
        }

        // 6-7. Attack phases
        attack_phase(round, squad_a, squad_b, &mut log, rng);
        attack_phase(round, squad_b, squad_a, &mut log, rng);

        // 8. Summary
        log.push(
            round,
            BattleEvent::RoundEnded {
                squad_a: squad_a.name.clone(),
                average_a: squad_a.average_position(),
                retreat_limit_a: squad_a.max_retreat_reached(),
                squad_b: squad_b.name.clone(),
                average_b: squad_b.average_position(),
                retreat_limit_b: squad_b.max_retreat_reached(),
            },
        );

        tracing::debug!(
            round,
            alive_a = squad_a.living_count(),
            alive_b = squad_b.living_count(),
            forced_engage,
            "Round complete"
        );

        rounds_fought += 1;
        round += 1;
    }

    squad_a.remove_dead();
    squad_b.remove_dead();

    let survivors_a = squad_a.size();
    let survivors_b = squad_b.size();
    let winner = Winner::from_survivors(survivors_a, survivors_b);

    log.push(
        0,
        BattleEvent::BattleEnded {
            squad_a: squad_a.name.clone(),
            survivors_a,
            squad_b: squad_b.name.clone(),
            survivors_b,
            winner,
        },
    );

    tracing::info!(
        rounds = rounds_fought,
        survivors_a,
        survivors_b,
        ?winner,
        "Battle finished"
    );

    BattleReport {
        squad_a: squad_a.name.clone(),
        squad_b: squad_b.name.clone(),
        survivors_a,
        survivors_b,
        winner,
        rounds_fought,
        seed: None,
        log,
    }
}

/// Build both squads from a scenario and fight them with a seeded RNG.
///
/// Without a configured seed one is drawn at random; either way the seed used
/// is recorded in the report.
pub fn run_scenario(scenario: &Scenario) -> Result<BattleReport> {
    scenario.validate()?;

    let mut squad_a = create_squad(&scenario.squad_a)?;
    let mut squad_b = create_squad(&scenario.squad_b)?;

    let seed = scenario.battle.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut report = simulate_battle(
        &mut squad_a,
        &mut squad_b,
        scenario.battle.max_rounds,
        &mut rng,
    );
    report.seed = Some(seed);
    Ok(report)
}
