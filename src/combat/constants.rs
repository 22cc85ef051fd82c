//! Combat rule constants - all tunable values in one place

// Starting lines, 50 units apart
pub const MELEE_START_POSITION: f64 = 0.0;
pub const RANGED_START_POSITION: f64 = 50.0;

// Attack reach (inclusive)
pub const MELEE_REACH: f64 = 5.0;
pub const RANGED_REACH: f64 = 30.0;

// Retreats allowed before the whole battle is forced to engage
pub const MAX_RETREATS: u32 = 3;

// Attack roll
pub const D20_SIDES: u32 = 20;
pub const CRITICAL_HIT_ROLL: u32 = 20;
pub const CRITICAL_MISS_ROLL: u32 = 1;

// Ability modifiers are measured from this score
pub const ABILITY_BASELINE: i32 = 10;

// Round cap when a scenario does not set one
pub const DEFAULT_MAX_ROUNDS: u32 = 50;

// Input domains accepted by the squad factory
pub const ABILITY_RANGE: std::ops::RangeInclusive<i32> = 1..=30;
pub const ARMOR_CLASS_RANGE: std::ops::RangeInclusive<i32> = 1..=30;
pub const MAX_HEALTH_RANGE: std::ops::RangeInclusive<i32> = 1..=200;
pub const SPEED_RANGE: std::ops::RangeInclusive<u32> = 5..=60;
pub const SQUAD_SIZE_RANGE: std::ops::RangeInclusive<usize> = 0..=1500;
