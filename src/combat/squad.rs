//! A side in the battle: an owned, reshufflable list of combatants

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::combatant::Combatant;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Squad {
    pub name: String,
    pub fighters: Vec<Combatant>,
}

impl Squad {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fighters: Vec::new(),
        }
    }

    pub fn add_fighter(&mut self, fighter: Combatant) {
        self.fighters.push(fighter);
    }

    /// Drop every member at or below zero health
    pub fn remove_dead(&mut self) {
        self.fighters.retain(Combatant::is_alive);
    }

    /// Members currently in the collection, including any not yet removed by `remove_dead`
    pub fn size(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fighters.shuffle(rng);
    }

    /// Mean member position, 0 when empty
    pub fn average_position(&self) -> f64 {
        if self.fighters.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.fighters.iter().map(|f| f.position).sum();
        sum / self.fighters.len() as f64
    }

    pub fn max_retreat_reached(&self) -> bool {
        self.fighters.iter().any(Combatant::retreat_limit_reached)
    }

    pub fn living_count(&self) -> usize {
        self.fighters.iter().filter(|f| f.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::combatant::test_support::fighter;
    use crate::core::types::DamageCategory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn squad_of(n: usize, category: DamageCategory) -> Squad {
        let mut squad = Squad::new("A");
        for i in 0..n {
            squad.add_fighter(fighter(&format!("A-{}", i + 1), category));
        }
        squad
    }

    #[test]
    fn test_empty_squad_average_is_zero() {
        let squad = Squad::new("empty");
        assert_eq!(squad.size(), 0);
        assert_eq!(squad.average_position(), 0.0);
        assert!(!squad.max_retreat_reached());
    }

    #[test]
    fn test_average_position() {
        let mut squad = squad_of(3, DamageCategory::Melee);
        squad.fighters[0].position = 0.0;
        squad.fighters[1].position = 10.0;
        squad.fighters[2].position = 35.0;
        assert_eq!(squad.average_position(), 15.0);
    }

    #[test]
    fn test_remove_dead_keeps_only_living() {
        let mut squad = squad_of(4, DamageCategory::Melee);
        squad.fighters[1].take_damage(10);
        squad.fighters[3].take_damage(25);
        assert_eq!(squad.size(), 4);
        assert_eq!(squad.living_count(), 2);

        squad.remove_dead();
        assert_eq!(squad.size(), 2);
        let ids: Vec<_> = squad.fighters.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["A-1", "A-3"]);
    }

    #[test]
    fn test_retreat_limit_from_any_member() {
        let mut squad = squad_of(3, DamageCategory::Ranged);
        assert!(!squad.max_retreat_reached());
        squad.fighters[2].retreat_count = 3;
        assert!(squad.max_retreat_reached());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut squad = squad_of(20, DamageCategory::Melee);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        squad.shuffle(&mut rng);

        let mut ids: Vec<_> = squad.fighters.iter().map(|f| f.id.clone()).collect();
        ids.sort();
        let mut expected: Vec<_> = (1..=20).map(|i| format!("A-{}", i)).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut first = squad_of(10, DamageCategory::Melee);
        let mut second = squad_of(10, DamageCategory::Melee);
        first.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
        second.shuffle(&mut ChaCha8Rng::seed_from_u64(9));

        let a: Vec<_> = first.fighters.iter().map(|f| &f.id).collect();
        let b: Vec<_> = second.fighters.iter().map(|f| &f.id).collect();
        assert_eq!(a, b);
    }
}
