//! Property tests for combatant rules

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use squad_battle::combat::{ability_modifier, Combatant, CombatantStats, DiceSpec};
use squad_battle::core::DamageCategory;

fn arb_category() -> impl Strategy<Value = DamageCategory> {
    prop_oneof![Just(DamageCategory::Melee), Just(DamageCategory::Ranged)]
}

fn arb_stats() -> impl Strategy<Value = CombatantStats> {
    (1i32..=30, 1i32..=30, 1u32..=6, 1u32..=12, 1i32..=200, arb_category(), 5u32..=60).prop_map(
        |(strength, dexterity, count, sides, max_health, category, speed)| CombatantStats {
            strength,
            dexterity,
            constitution: 10,
            damage_dice: DiceSpec { count, sides },
            max_health,
            category,
            speed,
            armor_class: 10,
        },
    )
}

proptest! {
    #[test]
    fn large_dice_never_wrap(count in 1u32..=64, sides in 1u32..=u32::MAX, seed: u64) {
        let dice = DiceSpec::new(count, sides).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let total = dice.roll(&mut rng);
        prop_assert!(total >= dice.min_total());
        prop_assert!(total <= dice.max_total());
    }

    #[test]
    fn damage_with_large_dice_is_non_negative(count in 1u32..=64, sides in 1u32..=u32::MAX, critical: bool, seed: u64) {
        let stats = CombatantStats {
            strength: 30,
            dexterity: 10,
            constitution: 10,
            damage_dice: DiceSpec { count, sides },
            max_health: 10,
            category: DamageCategory::Melee,
            speed: 30,
            armor_class: 10,
        };
        let fighter = Combatant::new("X-1", stats);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        prop_assert!(fighter.roll_damage(critical, &mut rng) >= 0);
    }

    #[test]
    fn modifier_is_floored_half(score in -60i32..=60) {
        let expected = ((score - 10) as f64 / 2.0).floor() as i32;
        prop_assert_eq!(ability_modifier(score), expected);
    }

    #[test]
    fn damage_is_non_negative_and_bounded(stats in arb_stats(), critical: bool, seed: u64) {
        let fighter = Combatant::new("X-1", stats.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dice_rolls = if critical { 2 } else { 1 };
        let max_dice = (stats.damage_dice.count * stats.damage_dice.sides) as i32 * dice_rolls;
        let min_dice = stats.damage_dice.count as i32 * dice_rolls;
        let modifier = fighter.damage_modifier();

        let damage = fighter.roll_damage(critical, &mut rng);
        prop_assert!(damage >= 0);
        prop_assert!(damage <= (max_dice + modifier).max(0));
        prop_assert!(damage >= (min_dice + modifier).max(0));
    }

    #[test]
    fn health_tracks_damage_sum(stats in arb_stats(), hits in prop::collection::vec(0i32..40, 0..12)) {
        let mut fighter = Combatant::new("X-1", stats.clone());
        for &hit in &hits {
            fighter.take_damage(hit);
        }
        let expected = stats.max_health - hits.iter().sum::<i32>();
        prop_assert_eq!(fighter.current_health, expected);
        prop_assert_eq!(fighter.is_alive(), expected > 0);
    }

    #[test]
    fn free_movement_never_passes_target(
        stats in arb_stats(),
        start in -200.0f64..200.0,
        target in -200.0f64..200.0,
    ) {
        let mut fighter = Combatant::new("X-1", stats);
        fighter.position = start;
        fighter.move_towards(target, false);

        if start < target {
            prop_assert!(fighter.position <= target);
            prop_assert!(fighter.position > start);
        } else {
            prop_assert!(fighter.position >= target);
            prop_assert!(fighter.position <= start);
        }
    }

    #[test]
    fn forced_movement_stays_on_category_side(
        stats in arb_stats(),
        start in -200.0f64..200.0,
        target in -200.0f64..200.0,
    ) {
        let category = stats.category;
        let mut fighter = Combatant::new("X-1", stats);
        fighter.position = start;
        fighter.move_towards(target, true);

        match category {
            DamageCategory::Melee => prop_assert!(fighter.position <= target),
            DamageCategory::Ranged => prop_assert!(fighter.position >= target),
        }
        prop_assert_eq!(fighter.retreat_count, 0);
    }

    #[test]
    fn retreats_never_exceed_cap(
        stats in arb_stats(),
        targets in prop::collection::vec((-200.0f64..200.0, any::<bool>()), 1..40),
    ) {
        let mut fighter = Combatant::new("X-1", stats);
        for (target, forced) in targets {
            fighter.move_towards(target, forced);
            prop_assert!(fighter.retreat_count <= 3);
        }
    }
}
