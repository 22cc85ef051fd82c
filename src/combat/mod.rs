pub mod combatant;
pub mod constants;
pub mod dice;
pub mod factory;
pub mod squad;

pub use combatant::{ability_modifier, AttackRoll, Combatant, CombatantStats};
pub use dice::DiceSpec;
pub use factory::create_squad;
pub use squad::Squad;
