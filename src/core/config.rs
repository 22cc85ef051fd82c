//! Battle configuration: squad parameter sets, battle settings and scenario files
//!
//! A scenario file is TOML with three tables:
//!
//! ```toml
//! [battle]
//! max_rounds = 50
//! seed = 1234
//!
//! [squad_a]
//! strength = 14
//! damage_dice = "1d8"
//! damage_category = "melee"
//! squad_size = 20
//!
//! [squad_b]
//! dexterity = 16
//! damage_dice = "1d6"
//! damage_category = "ranged"
//! squad_size = 15
//! ```
//!
//! Omitted squad fields fall back to the defaults of [`SquadParams`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    ABILITY_RANGE, ARMOR_CLASS_RANGE, DEFAULT_MAX_ROUNDS, MAX_HEALTH_RANGE, SPEED_RANGE,
    SQUAD_SIZE_RANGE,
};
use crate::combat::dice::DiceSpec;
use crate::core::error::{Result, SimError};
use crate::core::types::DamageCategory;

/// Parameters shared by every member of one squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadParams {
    pub name: String,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub armor_class: i32,
    /// `<count>d<size>`, e.g. "2d6"
    pub damage_dice: String,
    pub max_health: i32,
    pub damage_category: DamageCategory,
    pub speed: u32,
    pub squad_size: usize,
}

impl Default for SquadParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            strength: 10,
            dexterity: 10,
            constitution: 10,
            armor_class: 10,
            damage_dice: "1d8".to_string(),
            max_health: 10,
            damage_category: DamageCategory::Melee,
            speed: 30,
            squad_size: 10,
        }
    }
}

fn check_range<T>(field: &str, value: T, range: &std::ops::RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{} = {} is outside {}..={}",
            field,
            value,
            range.start(),
            range.end()
        )))
    }
}

impl SquadParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check every attribute against its domain and parse the dice
    pub fn validate(&self) -> Result<DiceSpec> {
        if self.name.trim().is_empty() {
            return Err(SimError::InvalidConfig("squad name must not be empty".into()));
        }
        check_range("strength", self.strength, &ABILITY_RANGE)?;
        check_range("dexterity", self.dexterity, &ABILITY_RANGE)?;
        check_range("constitution", self.constitution, &ABILITY_RANGE)?;
        check_range("armor_class", self.armor_class, &ARMOR_CLASS_RANGE)?;
        check_range("max_health", self.max_health, &MAX_HEALTH_RANGE)?;
        check_range("speed", self.speed, &SPEED_RANGE)?;
        check_range("squad_size", self.squad_size, &SQUAD_SIZE_RANGE)?;
        DiceSpec::parse(&self.damage_dice)
    }
}

/// Engine-level settings for one battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleSettings {
    pub max_rounds: u32,
    /// Drawn at random (and reported) when absent
    pub seed: Option<u64>,
}

impl Default for BattleSettings {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }
}

impl BattleSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == 0 {
            return Err(SimError::InvalidConfig("max_rounds must be at least 1".into()));
        }
        Ok(())
    }
}

/// A complete battle description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub battle: BattleSettings,
    #[serde(default = "default_squad_a")]
    pub squad_a: SquadParams,
    #[serde(default = "default_squad_b")]
    pub squad_b: SquadParams,
}

fn default_squad_a() -> SquadParams {
    SquadParams::named("A")
}

fn default_squad_b() -> SquadParams {
    SquadParams::named("B")
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            battle: BattleSettings::default(),
            squad_a: default_squad_a(),
            squad_b: default_squad_b(),
        }
    }
}

impl Scenario {
    pub fn new(squad_a: SquadParams, squad_b: SquadParams) -> Self {
        Self {
            battle: BattleSettings::default(),
            squad_a,
            squad_b,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.battle.seed = Some(seed);
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.battle.max_rounds = max_rounds;
        self
    }

    /// Load a scenario from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a scenario from a TOML string. Squads without a name are
    /// called "A" and "B".
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut scenario: Scenario = toml::from_str(content)?;
        if scenario.squad_a.name.trim().is_empty() {
            scenario.squad_a.name = "A".to_string();
        }
        if scenario.squad_b.name.trim().is_empty() {
            scenario.squad_b.name = "B".to_string();
        }
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        self.battle.validate()?;
        self.squad_a.validate()?;
        self.squad_b.validate()?;
        if self.squad_a.name == self.squad_b.name {
            return Err(SimError::InvalidConfig(format!(
                "both squads are named '{}'",
                self.squad_a.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let dice = SquadParams::named("A").validate().unwrap();
        assert_eq!(dice, DiceSpec { count: 1, sides: 8 });
    }

    #[test]
    fn test_out_of_domain_values_rejected() {
        let mut params = SquadParams::named("A");
        params.strength = 31;
        assert!(matches!(params.validate(), Err(SimError::InvalidConfig(_))));

        let mut params = SquadParams::named("A");
        params.speed = 4;
        assert!(matches!(params.validate(), Err(SimError::InvalidConfig(_))));

        let mut params = SquadParams::named("A");
        params.squad_size = 1501;
        assert!(matches!(params.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_squad_is_valid() {
        let mut params = SquadParams::named("A");
        params.squad_size = 0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_malformed_dice_rejected() {
        let mut params = SquadParams::named("A");
        params.damage_dice = "2x6".to_string();
        assert!(matches!(params.validate(), Err(SimError::InvalidDice(_))));
    }

    #[test]
    fn test_parse_scenario_with_defaults() {
        let scenario = Scenario::parse_toml(
            r#"
            [battle]
            seed = 99

            [squad_a]
            strength = 16
            squad_size = 3

            [squad_b]
            damage_category = "ranged"
            damage_dice = "2d4"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.battle.seed, Some(99));
        assert_eq!(scenario.battle.max_rounds, 50);
        assert_eq!(scenario.squad_a.name, "A");
        assert_eq!(scenario.squad_a.strength, 16);
        assert_eq!(scenario.squad_a.squad_size, 3);
        assert_eq!(scenario.squad_b.name, "B");
        assert_eq!(scenario.squad_b.damage_category, DamageCategory::Ranged);
        assert_eq!(scenario.squad_b.speed, 30);
    }

    #[test]
    fn test_parse_scenario_rejects_bad_category() {
        let result = Scenario::parse_toml(
            r#"
            [squad_a]
            damage_category = "arcane"
            "#,
        );
        assert!(matches!(result, Err(SimError::TomlError(_))));
    }

    #[test]
    fn test_zero_round_cap_rejected() {
        let scenario = Scenario::default().with_max_rounds(0);
        assert!(matches!(scenario.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let scenario = Scenario::new(SquadParams::named("X"), SquadParams::named("X"));
        assert!(scenario.validate().is_err());
    }
}
