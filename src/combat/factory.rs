//! Builds squads of identical combatants from a parameter set

use crate::combat::combatant::{Combatant, CombatantStats};
use crate::combat::squad::Squad;
use crate::core::config::SquadParams;
use crate::core::error::Result;

/// Create a squad of `params.squad_size` fighters labelled `<name>-1`, `<name>-2`, ...
///
/// Fails before any fighter is built if the parameters are out of domain or
/// the damage dice cannot be parsed.
pub fn create_squad(params: &SquadParams) -> Result<Squad> {
    let damage_dice = params.validate()?;

    let stats = CombatantStats {
        strength: params.strength,
        dexterity: params.dexterity,
        constitution: params.constitution,
        damage_dice,
        max_health: params.max_health,
        category: params.damage_category,
        speed: params.speed,
        armor_class: params.armor_class,
    };

    let mut squad = Squad::new(params.name.clone());
    squad.fighters.reserve(params.squad_size);
    for i in 0..params.squad_size {
        squad.add_fighter(Combatant::new(format!("{}-{}", params.name, i + 1), stats.clone()));
    }

    tracing::debug!(
        squad = %params.name,
        size = params.squad_size,
        category = params.damage_category.name(),
        "Squad created"
    );

    Ok(squad)
}
