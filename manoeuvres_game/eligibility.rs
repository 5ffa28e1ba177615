//! Which orders, rituals and units a player may pick.
use manoeuvres_types::{
    common::{Faction, ForceId, Side},
    errors::BattleError,
    forces::{ForceDef, FortificationDef},
    orders::OrderDef,
    rituals::ForceRitualDef,
};

use crate::catalog::RuleCatalog;

/// Orders a force may be given: the standard orders adjusted by its nation,
/// then the orders its quality unlocks. Offensive orders come first.
pub fn available_orders(
    catalog: &dyn RuleCatalog,
    force_id: ForceId,
) -> Result<Vec<&OrderDef>, BattleError> {
    let force = catalog.force(force_id)?;
    let nation = catalog.nation(force.nation_id)?;
    let availability = catalog.order_availability();
    let nation_rule = availability.nation_rule(nation.id);

    let mut ids = availability.standard.clone();
    if let Some(rule) = nation_rule {
        ids.extend(rule.grants.iter().copied());
        ids.retain(|id| !rule.revokes.contains(id));
    }
    if nation.faction != Faction::Empire {
        ids.retain(|id| !availability.imperial_only.contains(id));
    }
    ids.extend(catalog.quality(force.quality_id)?.orders.iter().copied());

    ids.sort();
    ids.dedup();

    let mut orders = ids
        .into_iter()
        .map(|id| catalog.order(id))
        .collect::<Result<Vec<_>, _>>()?;
    orders.sort_by_key(|order| (!order.offensive, order.id));

    Ok(orders)
}

/// Rituals a force may be enchanted with. Army rituals only work on armies,
/// the others only on navies.
pub fn available_force_rituals(
    catalog: &dyn RuleCatalog,
    force_id: ForceId,
) -> Result<Vec<&ForceRitualDef>, BattleError> {
    let force = catalog.force(force_id)?;

    Ok(catalog
        .force_rituals()
        .into_iter()
        .filter(|ritual| ritual.army_ritual == force.is_army)
        .collect())
}

/// Forces a side may field. Barbarian players can field any force.
pub fn force_options(
    catalog: &dyn RuleCatalog,
    side: Side,
) -> Result<Vec<&ForceDef>, BattleError> {
    let mut options = Vec::new();
    for force in catalog.forces() {
        let eligible = match side {
            Side::Imperial => catalog.nation(force.nation_id)?.faction == Faction::Empire,
            Side::Barbarian => true,
        };
        if eligible {
            options.push(force);
        }
    }
    Ok(options)
}

pub fn fortification_options(catalog: &dyn RuleCatalog, side: Side) -> Vec<&FortificationDef> {
    catalog
        .fortifications()
        .into_iter()
        .filter(|fortification| fortification.held_by == side)
        .collect()
}

#[cfg(test)]
mod tests {
    use manoeuvres_types::errors::ReferenceKind;

    use super::*;
    use crate::test_utils::{
        DECISIVE_RITUAL, FORCE_DRUJ_HORDE, FORCE_DRUJ_RAIDERS, FORCE_IMPERIAL_HOST,
        FORCE_IMPERIAL_LEGION, FORCE_IMPERIAL_NAVY, FORCE_WINTERMARK_WARBAND,
        FORTIFICATION_FORTRESS, FORTIFICATION_STOCKADE, NAVY_RITUAL, ORDER_CRUEL,
        ORDER_HOLD_THE_LINE, ORDER_LAY_LOW, ORDER_OUTMANOUVERE, ORDER_OVERWHELM,
        ORDER_TEND_THE_FALLEN, STRENGTH_RITUAL, rule_book_factory,
    };

    fn order_ids(orders: &[&OrderDef]) -> Vec<u32> {
        orders.iter().map(|o| o.id.0).collect()
    }

    #[test]
    fn test_imperial_force_gets_standard_orders() {
        let book = rule_book_factory();
        let orders = available_orders(&book, ForceId(FORCE_IMPERIAL_LEGION)).unwrap();

        assert_eq!(
            order_ids(&orders),
            vec![ORDER_OVERWHELM, ORDER_CRUEL, ORDER_HOLD_THE_LINE, ORDER_LAY_LOW]
        );
    }

    #[test]
    fn test_barbarian_force_loses_imperial_only_orders() {
        let book = rule_book_factory();
        let orders = available_orders(&book, ForceId(FORCE_DRUJ_RAIDERS)).unwrap();

        assert_eq!(
            order_ids(&orders),
            vec![ORDER_OVERWHELM, ORDER_HOLD_THE_LINE, ORDER_LAY_LOW]
        );
    }

    #[test]
    fn test_nation_and_quality_adjust_orders() {
        let book = rule_book_factory();
        let orders = available_orders(&book, ForceId(FORCE_WINTERMARK_WARBAND)).unwrap();

        // Wintermark trades Lay Low for Outmanouvere; healers add Tend the Fallen.
        assert_eq!(
            order_ids(&orders),
            vec![
                ORDER_OVERWHELM,
                ORDER_CRUEL,
                ORDER_OUTMANOUVERE,
                ORDER_HOLD_THE_LINE,
                ORDER_TEND_THE_FALLEN
            ]
        );
    }

    #[test]
    fn test_unknown_force_has_no_orders() {
        let book = rule_book_factory();
        let err = available_orders(&book, ForceId(99)).unwrap_err();

        assert_eq!(
            err,
            BattleError::ReferenceNotFound {
                kind: ReferenceKind::Force,
                id: 99
            }
        );
    }

    #[test]
    fn test_rituals_match_army_or_navy() {
        let book = rule_book_factory();

        let army: Vec<u32> = available_force_rituals(&book, ForceId(FORCE_IMPERIAL_LEGION))
            .unwrap()
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(army, vec![STRENGTH_RITUAL, DECISIVE_RITUAL]);

        let navy: Vec<u32> = available_force_rituals(&book, ForceId(FORCE_IMPERIAL_NAVY))
            .unwrap()
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(navy, vec![NAVY_RITUAL]);
    }

    #[test]
    fn test_force_options_per_side() {
        let book = rule_book_factory();

        let imperial: Vec<u32> = force_options(&book, Side::Imperial)
            .unwrap()
            .iter()
            .map(|f| f.id.0)
            .collect();
        assert_eq!(
            imperial,
            vec![
                FORCE_IMPERIAL_LEGION,
                FORCE_IMPERIAL_HOST,
                FORCE_WINTERMARK_WARBAND,
                FORCE_IMPERIAL_NAVY
            ]
        );

        let barbarian = force_options(&book, Side::Barbarian).unwrap();
        assert_eq!(barbarian.len(), 6);
        assert!(barbarian.iter().any(|f| f.id.0 == FORCE_DRUJ_HORDE));
    }

    #[test]
    fn test_fortification_options_per_side() {
        let book = rule_book_factory();

        let imperial = fortification_options(&book, Side::Imperial);
        assert_eq!(imperial.len(), 1);
        assert_eq!(imperial[0].id.0, FORTIFICATION_FORTRESS);

        let barbarian = fortification_options(&book, Side::Barbarian);
        assert_eq!(barbarian[0].id.0, FORTIFICATION_STOCKADE);
    }
}
