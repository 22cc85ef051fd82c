//! Core types shared by the combat and battle modules

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    MELEE_REACH, MELEE_START_POSITION, RANGED_REACH, RANGED_START_POSITION,
};

/// Ability score that feeds attack and damage modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
}

/// Direction a combatant moves while forced engagement is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcedDirection {
    /// `min(position + speed, target)`
    Up,
    /// `max(position - speed, target)`
    Down,
}

/// Everything that differs between melee and ranged combatants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    pub ability: Ability,
    pub start_position: f64,
    pub reach: f64,
    pub forced_direction: ForcedDirection,
}

/// How a combatant deals damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageCategory {
    #[default]
    Melee,
    Ranged,
}

impl DamageCategory {
    pub const fn profile(self) -> CategoryProfile {
        match self {
            DamageCategory::Melee => CategoryProfile {
                ability: Ability::Strength,
                start_position: MELEE_START_POSITION,
                reach: MELEE_REACH,
                forced_direction: ForcedDirection::Up,
            },
            DamageCategory::Ranged => CategoryProfile {
                ability: Ability::Dexterity,
                start_position: RANGED_START_POSITION,
                reach: RANGED_REACH,
                forced_direction: ForcedDirection::Down,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DamageCategory::Melee => "melee",
            DamageCategory::Ranged => "ranged",
        }
    }
}

/// Final verdict, decided by strictly greater survivor count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    SquadA,
    SquadB,
    Draw,
}

impl Winner {
    pub fn from_survivors(survivors_a: usize, survivors_b: usize) -> Self {
        match survivors_a.cmp(&survivors_b) {
            std::cmp::Ordering::Greater => Winner::SquadA,
            std::cmp::Ordering::Less => Winner::SquadB,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}
