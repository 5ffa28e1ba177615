use manoeuvres_types::{battle::UnitContribution, orders::OrderEffect};

use crate::rules::BattleRules;

use super::{ResolvedFortification, ResolvedForce};

/// Computes what a force brings to the battle.
///
/// `side_forces` holds every force of the same side, `force` included: allies'
/// orders can raise the casualties this force inflicts.
pub fn force_contribution(
    force: &ResolvedForce<'_>,
    side_forces: &[ResolvedForce<'_>],
    rules: &BattleRules,
) -> UnitContribution {
    let effective_strength = force.effective_strength() as f64;

    let mut casualty_modifier = force.order.map_or(0.0, |o| o.casualties_inflicted_modifier);
    for ally in side_forces.iter().filter(|ally| force.is_ally(ally)) {
        if ally.has_order_effect(OrderEffect::AlwaysBoostCasualties) {
            casualty_modifier += rules.ally_casualty_bonus;
        }
        if ally.has_order_effect(OrderEffect::BoostCasualtiesForOffensiveAllies)
            && force.is_offensive()
        {
            casualty_modifier += rules.ally_casualty_bonus;
        }
    }
    let casualties_inflicted = (effective_strength * (1.0 + casualty_modifier) / 10.0).floor();

    let victory_bonus = if force.ritual.is_some_and(|r| r.decisive) {
        rules.decisive_bonus
    } else {
        0.0
    };

    match force.order {
        Some(order) if order.offensive => UnitContribution {
            casualties_inflicted,
            offensive: effective_strength * (1.0 + order.territory_claimed_modifier)
                + victory_bonus,
            defensive: 0.0,
        },
        Some(order) => UnitContribution {
            casualties_inflicted,
            offensive: 0.0,
            defensive: effective_strength * (1.0 + order.territory_defence_modifier)
                + victory_bonus,
        },
        // Without an order a force still fights, but claims and holds nothing.
        None => UnitContribution {
            casualties_inflicted,
            ..Default::default()
        },
    }
}

/// Computes what a fortification brings to the battle.
///
/// Only a besieged fortification inflicts casualties, and it counts double
/// towards defence.
pub fn fortification_contribution(fortification: &ResolvedFortification<'_>) -> UnitContribution {
    let effective_strength = fortification.effective_strength() as f64;

    if fortification.unit.besieged {
        UnitContribution {
            casualties_inflicted: effective_strength / 10.0,
            offensive: 0.0,
            defensive: effective_strength * 2.0,
        }
    } else {
        UnitContribution {
            casualties_inflicted: 0.0,
            offensive: 0.0,
            defensive: effective_strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use manoeuvres_types::common::Side;

    use super::*;
    use crate::{
        battle::{ResolvedFortification, ResolvedForce},
        test_utils::{
            CommittedForceFactoryOptions, CommittedFortificationFactoryOptions,
            DECISIVE_RITUAL, FORCE_IMPERIAL_LEGION, FORTIFICATION_STOCKADE,
            ORDER_FIRE_IN_THE_BLOOD, ORDER_HOLD_THE_LINE, ORDER_OVERWHELM, ORDER_PRESS_THE_ATTACK,
            ORDER_WHATEVER_IT_TAKES, STONE_SKIN_RITUAL, STRENGTH_RITUAL, committed_force_factory,
            committed_fortification_factory, rule_book_factory,
        },
    };

    fn force(
        slot: usize,
        order: Option<u32>,
        ritual: Option<u32>,
        strength: u32,
    ) -> manoeuvres_types::battle::CommittedForce {
        committed_force_factory(CommittedForceFactoryOptions {
            side: Some(Side::Imperial),
            slot: Some(slot),
            force_id: Some(FORCE_IMPERIAL_LEGION),
            order_id: order,
            ritual_id: ritual,
            strength: Some(strength),
        })
    }

    #[test]
    fn test_offensive_force_contribution() {
        let book = rule_book_factory();
        let units = [force(0, Some(ORDER_OVERWHELM), None, 5000)];
        let resolved: Vec<ResolvedForce> = units
            .iter()
            .map(|u| ResolvedForce::resolve(&book, u).unwrap())
            .collect();

        let contribution = force_contribution(&resolved[0], &resolved, &BattleRules::default());

        assert_eq!(contribution.casualties_inflicted, 500.0);
        assert_eq!(contribution.offensive, 6000.0);
        assert_eq!(contribution.defensive, 0.0);
    }

    #[test]
    fn test_defensive_force_contribution_with_ritual() {
        let book = rule_book_factory();
        let units = [force(0, Some(ORDER_HOLD_THE_LINE), Some(STRENGTH_RITUAL), 3500)];
        let resolved: Vec<ResolvedForce> = units
            .iter()
            .map(|u| ResolvedForce::resolve(&book, u).unwrap())
            .collect();

        let contribution = force_contribution(&resolved[0], &resolved, &BattleRules::default());

        // 3500 + 500 from the ritual
        assert_eq!(contribution.casualties_inflicted, 400.0);
        assert_eq!(contribution.offensive, 0.0);
        assert_eq!(contribution.defensive, 4400.0);
    }

    #[test]
    fn test_decisive_ritual_adds_victory_bonus() {
        let book = rule_book_factory();
        let units = [force(0, Some(ORDER_HOLD_THE_LINE), Some(DECISIVE_RITUAL), 2000)];
        let resolved: Vec<ResolvedForce> = units
            .iter()
            .map(|u| ResolvedForce::resolve(&book, u).unwrap())
            .collect();

        let contribution = force_contribution(&resolved[0], &resolved, &BattleRules::default());

        assert_eq!(contribution.defensive, 2000.0 * 1.1 + 2000.0);
        assert_eq!(contribution.casualties_inflicted, 200.0);
    }

    #[test]
    fn test_force_without_order_only_inflicts_casualties() {
        let book = rule_book_factory();
        let units = [force(0, None, None, 2500)];
        let resolved: Vec<ResolvedForce> = units
            .iter()
            .map(|u| ResolvedForce::resolve(&book, u).unwrap())
            .collect();

        let contribution = force_contribution(&resolved[0], &resolved, &BattleRules::default());

        assert_eq!(contribution.casualties_inflicted, 250.0);
        assert_eq!(contribution.offensive, 0.0);
        assert_eq!(contribution.defensive, 0.0);
    }

    #[test]
    fn test_order_casualty_modifier() {
        let book = rule_book_factory();
        let units = [force(0, Some(ORDER_PRESS_THE_ATTACK), None, 2000)];
        let resolved: Vec<ResolvedForce> = units
            .iter()
            .map(|u| ResolvedForce::resolve(&book, u).unwrap())
            .collect();

        let contribution = force_contribution(&resolved[0], &resolved, &BattleRules::default());

        // 2000 * 1.5 / 10
        assert_eq!(contribution.casualties_inflicted, 300.0);
    }

    #[test]
    fn test_allied_orders_boost_casualties() {
        let book = rule_book_factory();
        let units = [
            force(0, Some(ORDER_OVERWHELM), None, 2000),
            force(1, Some(ORDER_WHATEVER_IT_TAKES), None, 1000),
            force(2, Some(ORDER_WHATEVER_IT_TAKES), None, 1000),
            force(3, Some(ORDER_FIRE_IN_THE_BLOOD), None, 1000),
            force(4, Some(ORDER_HOLD_THE_LINE), None, 2000),
        ];
        let resolved: Vec<ResolvedForce> = units
            .iter()
            .map(|u| ResolvedForce::resolve(&book, u).unwrap())
            .collect();
        let rules = BattleRules::default();

        // Offensive: two "always" allies plus one "offensive allies" ally.
        let offensive = force_contribution(&resolved[0], &resolved, &rules);
        assert_eq!(offensive.casualties_inflicted, 260.0);

        // Defensive: only the two "always" allies count.
        let defensive = force_contribution(&resolved[4], &resolved, &rules);
        assert_eq!(defensive.casualties_inflicted, 240.0);

        // A booster never boosts itself, only its allies.
        let booster = force_contribution(&resolved[1], &resolved, &rules);
        assert_eq!(booster.casualties_inflicted, 120.0);
    }

    #[test]
    fn test_besieged_fortification_contribution() {
        let book = rule_book_factory();
        let unit = committed_fortification_factory(CommittedFortificationFactoryOptions {
            fortification_id: Some(FORTIFICATION_STOCKADE),
            strength: Some(2000),
            besieged: Some(true),
            ..Default::default()
        });
        let resolved = ResolvedFortification::resolve(&book, &unit).unwrap();

        let contribution = fortification_contribution(&resolved);

        assert_eq!(contribution.casualties_inflicted, 200.0);
        assert_eq!(contribution.offensive, 0.0);
        assert_eq!(contribution.defensive, 4000.0);
    }

    #[test]
    fn test_unbesieged_fortification_contribution() {
        let book = rule_book_factory();
        let unit = committed_fortification_factory(CommittedFortificationFactoryOptions {
            fortification_id: Some(FORTIFICATION_STOCKADE),
            ritual_id: Some(STONE_SKIN_RITUAL),
            strength: Some(1555),
            besieged: Some(false),
            ..Default::default()
        });
        let resolved = ResolvedFortification::resolve(&book, &unit).unwrap();

        let contribution = fortification_contribution(&resolved);

        assert_eq!(contribution.casualties_inflicted, 0.0);
        assert_eq!(contribution.defensive, 2555.0);
    }
}
