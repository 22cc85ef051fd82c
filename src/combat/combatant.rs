//! A single participant: immutable base stats plus mutable battle state

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    ABILITY_BASELINE, CRITICAL_HIT_ROLL, CRITICAL_MISS_ROLL, D20_SIDES, MAX_RETREATS,
};
use crate::combat::dice::DiceSpec;
use crate::core::types::{Ability, CategoryProfile, DamageCategory, ForcedDirection};

/// d20-style modifier: `floor((score - 10) / 2)`, also for scores below 10
pub fn ability_modifier(score: i32) -> i32 {
    (score - ABILITY_BASELINE).div_euclid(2)
}

/// Base attributes shared by every member of a squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub damage_dice: DiceSpec,
    pub max_health: i32,
    pub category: DamageCategory,
    pub speed: u32,
    pub armor_class: i32,
}

impl CombatantStats {
    pub fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
        }
    }
}

/// Result of a d20 attack roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoll {
    /// Natural die face, 1..=20
    pub raw: u32,
    /// `raw` plus the attack modifier
    pub total: i32,
}

impl AttackRoll {
    pub fn is_critical_hit(&self) -> bool {
        self.raw == CRITICAL_HIT_ROLL
    }

    pub fn is_critical_miss(&self) -> bool {
        self.raw == CRITICAL_MISS_ROLL
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    /// Label unique within the owning squad, e.g. `A-3`
    pub id: String,
    pub stats: CombatantStats,
    /// May go below zero; never clamped
    pub current_health: i32,
    pub position: f64,
    pub retreat_count: u32,
}

impl Combatant {
    /// Full health, standing on the starting line of its damage category
    pub fn new(id: impl Into<String>, stats: CombatantStats) -> Self {
        let profile = stats.category.profile();
        Self {
            id: id.into(),
            current_health: stats.max_health,
            position: profile.start_position,
            retreat_count: 0,
            stats,
        }
    }

    fn profile(&self) -> CategoryProfile {
        self.stats.category.profile()
    }

    pub fn attack_modifier(&self) -> i32 {
        ability_modifier(self.stats.score(self.profile().ability))
    }

    /// Same ability as the attack modifier
    pub fn damage_modifier(&self) -> i32 {
        self.attack_modifier()
    }

    pub fn roll_attack<R: Rng + ?Sized>(&self, rng: &mut R) -> AttackRoll {
        let raw = rng.gen_range(1..=D20_SIDES);
        AttackRoll {
            raw,
            total: raw as i32 + self.attack_modifier(),
        }
    }

    /// Critical hits roll the dice twice; the modifier is added once.
    /// Never negative.
    pub fn roll_damage<R: Rng + ?Sized>(&self, critical: bool, rng: &mut R) -> i32 {
        let mut total = self.stats.damage_dice.roll(rng);
        if critical {
            total = total.saturating_add(self.stats.damage_dice.roll(rng));
        }
        total.saturating_add(self.damage_modifier()).max(0)
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current_health -= amount;
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Move up to `speed` toward `target`.
    ///
    /// Under forced engagement melee moves with `min(pos + speed, target)` and
    /// ranged with `max(pos - speed, target)`, whichever side the target is on.
    /// Otherwise closing moves are free, while moves toward a lower target count
    /// as retreats and stop once `MAX_RETREATS` is reached.
    pub fn move_towards(&mut self, target: f64, forced_engage: bool) {
        let speed = self.stats.speed as f64;

        if forced_engage {
            self.position = match self.profile().forced_direction {
                ForcedDirection::Up => (self.position + speed).min(target),
                ForcedDirection::Down => (self.position - speed).max(target),
            };
        } else if self.position < target {
            self.position = (self.position + speed).min(target);
        } else if self.position > target && self.retreat_count < MAX_RETREATS {
            self.position = (self.position - speed).max(target);
            self.retreat_count += 1;
        }
    }

    pub fn distance_to(&self, other: &Combatant) -> f64 {
        (self.position - other.position).abs()
    }

    pub fn can_attack(&self, target: &Combatant) -> bool {
        self.distance_to(target) <= self.profile().reach
    }

    pub fn retreat_limit_reached(&self) -> bool {
        self.retreat_count >= MAX_RETREATS
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn stats(category: DamageCategory) -> CombatantStats {
        CombatantStats {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            damage_dice: DiceSpec { count: 1, sides: 8 },
            max_health: 10,
            category,
            speed: 30,
            armor_class: 10,
        }
    }

    pub fn fighter(id: &str, category: DamageCategory) -> Combatant {
        Combatant::new(id, stats(category))
    }
}
