//! Battle resolution.
//!
//! A battle is resolved in four steps:
//! 1. every committed unit is turned into a `UnitContribution`
//!    (casualties inflicted, offensive and defensive victory contribution);
//! 2. contributions are summed into one `SideTotals` per side;
//! 3. the side totals decide the `Outcome` and the victory points;
//! 4. each side's inflicted casualties are shared among the opposing units,
//!    forces and fortifications in separate pools.
//!
//! Every catalog lookup happens up front, so a missing reference aborts the
//! resolution before anything is computed.
use tracing::{debug, info};

use manoeuvres_types::{
    battle::{
        BattleSubmission, CommittedForce, CommittedFortification, ResolutionResult, SideTotals,
    },
    common::Side,
    errors::BattleError,
    forces::{ForceDef, FortificationDef},
    orders::{OrderDef, OrderEffect},
    rituals::{ForceRitualDef, FortificationRitualDef},
};

use crate::{catalog::RuleCatalog, rules::BattleRules};

mod aggregate;
mod casualties;
mod contribution;
mod victory;

pub use aggregate::aggregate;
pub use casualties::{distribute_force_casualties, distribute_fortification_casualties};
pub use contribution::{force_contribution, fortification_contribution};
pub use victory::{CrossOrderBonus, DeclaredOrders, resolve_victory_points};

/// A committed force together with its rule definitions.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedForce<'a> {
    pub unit: &'a CommittedForce,
    pub def: &'a ForceDef,
    pub order: Option<&'a OrderDef>,
    pub ritual: Option<&'a ForceRitualDef>,
}

impl<'a> ResolvedForce<'a> {
    pub fn resolve(catalog: &'a dyn RuleCatalog, unit: &'a CommittedForce) -> Result<Self, BattleError> {
        let def = catalog.force(unit.force_id)?;
        let order = unit.order_id.map(|id| catalog.order(id)).transpose()?;
        let ritual = unit.ritual_id.map(|id| catalog.force_ritual(id)).transpose()?;

        Ok(Self {
            unit,
            def,
            order,
            ritual,
        })
    }

    /// Declared strength plus the ritual's strength modifier.
    pub fn effective_strength(&self) -> i64 {
        let modifier = self.ritual.map_or(0, |r| r.effective_strength_modifier);
        i64::from(self.unit.declared_strength) + i64::from(modifier)
    }

    pub fn is_offensive(&self) -> bool {
        self.order.is_some_and(|o| o.offensive)
    }

    pub fn has_order_effect(&self, effect: OrderEffect) -> bool {
        self.order.is_some_and(|o| o.has_effect(effect))
    }

    /// Whether `other` is a different entry of the same side.
    pub fn is_ally(&self, other: &ResolvedForce<'_>) -> bool {
        self.unit.slot != other.unit.slot
    }
}

/// A committed fortification together with its rule definitions.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedFortification<'a> {
    pub unit: &'a CommittedFortification,
    pub def: &'a FortificationDef,
    pub ritual: Option<&'a FortificationRitualDef>,
}

impl<'a> ResolvedFortification<'a> {
    pub fn resolve(
        catalog: &'a dyn RuleCatalog,
        unit: &'a CommittedFortification,
    ) -> Result<Self, BattleError> {
        let def = catalog.fortification(unit.fortification_id)?;
        let ritual = unit
            .ritual_id
            .map(|id| catalog.fortification_ritual(id))
            .transpose()?;

        Ok(Self { unit, def, ritual })
    }

    pub fn effective_strength(&self) -> i64 {
        let modifier = self.ritual.map_or(0, |r| r.effective_strength_modifier);
        i64::from(self.unit.declared_strength) + i64::from(modifier)
    }
}

/// All units of one side, resolved against the catalog.
#[derive(Debug, Clone)]
pub struct ResolvedSide<'a> {
    pub side: Side,
    pub forces: Vec<ResolvedForce<'a>>,
    pub fortifications: Vec<ResolvedFortification<'a>>,
}

impl<'a> ResolvedSide<'a> {
    pub fn resolve(
        catalog: &'a dyn RuleCatalog,
        side: Side,
        submission: &'a BattleSubmission,
    ) -> Result<Self, BattleError> {
        let forces = submission.forces(side);
        let fortifications = submission.fortifications(side);

        check_membership(side, "forces", forces.iter().map(|f| (f.side, f.slot)))?;
        check_membership(
            side,
            "fortifications",
            fortifications.iter().map(|f| (f.side, f.slot)),
        )?;

        Ok(Self {
            side,
            forces: forces
                .iter()
                .map(|f| ResolvedForce::resolve(catalog, f))
                .collect::<Result<_, _>>()?,
            fortifications: fortifications
                .iter()
                .map(|f| ResolvedFortification::resolve(catalog, f))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Sums the contributions of every unit of the side.
    pub fn totals(&self, rules: &BattleRules) -> SideTotals {
        let forces = self
            .forces
            .iter()
            .map(|force| force_contribution(force, &self.forces, rules));
        let fortifications = self.fortifications.iter().map(fortification_contribution);

        aggregate(forces.chain(fortifications))
    }

    pub fn declared_orders(&self) -> DeclaredOrders<'a> {
        DeclaredOrders::from_forces(&self.forces)
    }
}

/// Every unit must be tagged with the side it was submitted for, and hold a
/// slot no other unit of the same list holds.
fn check_membership(
    side: Side,
    list: &str,
    units: impl Iterator<Item = (Side, usize)>,
) -> Result<(), BattleError> {
    let mut seen: Vec<usize> = Vec::new();
    for (unit_side, slot) in units {
        if unit_side != side {
            return Err(BattleError::invalid_input(
                format!("{side}_{list}[{slot}].side"),
                format!("unit is tagged {unit_side} but was submitted for the {side} side"),
            ));
        }
        if seen.contains(&slot) {
            return Err(BattleError::invalid_input(
                format!("{side}_{list}[{slot}].slot"),
                "slot is used by more than one unit",
            ));
        }
        seen.push(slot);
    }
    Ok(())
}

pub struct Battle<'a> {
    catalog: &'a dyn RuleCatalog,
    rules: &'a BattleRules,
    submission: &'a BattleSubmission,
}

impl<'a> Battle<'a> {
    pub fn new(
        catalog: &'a dyn RuleCatalog,
        rules: &'a BattleRules,
        submission: &'a BattleSubmission,
    ) -> Self {
        Self {
            catalog,
            rules,
            submission,
        }
    }

    /// Resolves the battle.
    pub fn resolve(&self) -> Result<ResolutionResult, BattleError> {
        // ====================================================================
        // STEP 1: Look up every rule definition
        // ====================================================================
        let imperial = ResolvedSide::resolve(self.catalog, Side::Imperial, self.submission)?;
        let barbarian = ResolvedSide::resolve(self.catalog, Side::Barbarian, self.submission)?;

        // ====================================================================
        // STEP 2: Contributions and side totals
        // ====================================================================
        let imperial_totals = imperial.totals(self.rules);
        let barbarian_totals = barbarian.totals(self.rules);
        debug!(?imperial_totals, ?barbarian_totals, "Side totals computed");

        // ====================================================================
        // STEP 3: Outcome and victory points
        // ====================================================================
        let points = resolve_victory_points(
            &imperial_totals,
            &barbarian_totals,
            &imperial.declared_orders(),
            &barbarian.declared_orders(),
            self.rules,
        );

        // ====================================================================
        // STEP 4: Casualties, each side suffering what the other inflicted
        // ====================================================================
        let mut casualties = Vec::new();
        for (own, opposing, inflicted) in [
            (&imperial, &barbarian, barbarian_totals.casualties_inflicted),
            (&barbarian, &imperial, imperial_totals.casualties_inflicted),
        ] {
            casualties.extend(distribute_force_casualties(
                inflicted,
                own.side,
                &own.forces,
                &opposing.forces,
                &points,
                self.rules,
            ));
            casualties.extend(distribute_fortification_casualties(
                inflicted,
                own.side,
                &own.fortifications,
                &opposing.forces,
                &points,
                self.rules,
            ));
        }

        info!(
            outcome = %points.outcome,
            total_victory_points = points.total,
            offensive_victory_points = points.offensive,
            defensive_victory_points = points.defensive,
            "Battle resolved"
        );

        Ok(ResolutionResult {
            outcome: points.outcome,
            total_victory_points: points.total,
            offensive_victory_points: points.offensive,
            defensive_victory_points: points.defensive,
            imperial: imperial_totals,
            barbarian: barbarian_totals,
            casualties,
        })
    }
}

/// Resolves a battle between the given imperial and barbarian units.
pub fn resolve_battle(
    catalog: &dyn RuleCatalog,
    rules: &BattleRules,
    imperial_forces: Vec<CommittedForce>,
    imperial_fortifications: Vec<CommittedFortification>,
    barbarian_forces: Vec<CommittedForce>,
    barbarian_fortifications: Vec<CommittedFortification>,
) -> Result<ResolutionResult, BattleError> {
    let submission = BattleSubmission {
        imperial_forces,
        imperial_fortifications,
        barbarian_forces,
        barbarian_fortifications,
    };
    Battle::new(catalog, rules, &submission).resolve()
}
