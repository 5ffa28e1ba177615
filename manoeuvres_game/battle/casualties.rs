use tracing::debug;

use manoeuvres_types::{
    battle::{UnitCasualties, UnitKind, VictoryPoints},
    common::Side,
    errors::BattleError,
    orders::OrderEffect,
};

use crate::rules::BattleRules;

use super::{ResolvedFortification, ResolvedForce};

/// Shares the casualties inflicted by the opposing side among `forces`.
///
/// Forces with an exempt order take no part: they keep their declared
/// strength and do not count towards the divisor.
pub fn distribute_force_casualties(
    total_casualties_inflicted: i64,
    side: Side,
    forces: &[ResolvedForce<'_>],
    opposing_forces: &[ResolvedForce<'_>],
    points: &VictoryPoints,
    rules: &BattleRules,
) -> Vec<UnitCasualties> {
    let eligible: Vec<&ResolvedForce> = forces
        .iter()
        .filter(|force| !force.has_order_effect(OrderEffect::Exempt))
        .collect();
    let share = pass_share(total_casualties_inflicted, eligible.len(), side, UnitKind::Force);

    let harsh = opposing_forces
        .iter()
        .any(|force| force.has_order_effect(OrderEffect::Harsh));
    let victor_reduction = victor_reduction(side, points);

    forces
        .iter()
        .map(|force| {
            let report = force_report(force, side);
            let Some(share) = share else {
                return report;
            };
            if force.has_order_effect(OrderEffect::Exempt) {
                return report;
            }

            let mut modifier =
                1.0 + force.order.map_or(0.0, |o| o.casualties_suffered_modifier);
            let tended = eligible
                .iter()
                .any(|other| force.is_ally(other) && other.has_order_effect(OrderEffect::Mercy));
            if tended {
                modifier -= rules.mercy_reduction;
            }
            modifier -= victor_reduction;

            let casualties = if force.has_order_effect(OrderEffect::LayLow) {
                0
            } else {
                shared_casualties(share, modifier)
            };
            let threshold = rules.force_break(force.def.large, harsh);

            apply_casualties(report, casualties, threshold)
        })
        .collect()
}

/// Shares the casualties inflicted by the opposing side among the besieged
/// `fortifications`. Fortifications that are not besieged are left untouched.
pub fn distribute_fortification_casualties(
    total_casualties_inflicted: i64,
    side: Side,
    fortifications: &[ResolvedFortification<'_>],
    opposing_forces: &[ResolvedForce<'_>],
    points: &VictoryPoints,
    rules: &BattleRules,
) -> Vec<UnitCasualties> {
    let eligible = fortifications.iter().filter(|f| f.unit.besieged).count();
    let share = pass_share(
        total_casualties_inflicted,
        eligible,
        side,
        UnitKind::Fortification,
    );

    // Only imperial forces storm walls, and only barbarian walls.
    let stormed = side == Side::Barbarian
        && opposing_forces
            .iter()
            .any(|force| force.has_order_effect(OrderEffect::Siege));

    let mut modifier = 1.0 - victor_reduction(side, points);
    if stormed {
        modifier += rules.siege_bonus;
    }

    fortifications
        .iter()
        .map(|fortification| {
            let report = fortification_report(fortification, side);
            match share {
                Some(share) if fortification.unit.besieged => apply_casualties(
                    report,
                    shared_casualties(share, modifier),
                    rules.fortification_break,
                ),
                _ => report,
            }
        })
        .collect()
}

/// Casualties each eligible unit of a pool takes before modifiers.
pub fn casualty_share(
    total_casualties_inflicted: i64,
    eligible: usize,
    side: Side,
    pool: UnitKind,
) -> Result<f64, BattleError> {
    if eligible == 0 {
        return Err(BattleError::DivisionDegenerate { side, pool });
    }
    Ok(total_casualties_inflicted as f64 / eligible as f64)
}

fn pass_share(total: i64, eligible: usize, side: Side, pool: UnitKind) -> Option<f64> {
    match casualty_share(total, eligible, side, pool) {
        Ok(share) => Some(share),
        Err(err) => {
            debug!(%err, "Skipping casualty pass");
            None
        }
    }
}

/// The victor suffers fewer casualties the more defensive points it earned.
fn victor_reduction(side: Side, points: &VictoryPoints) -> f64 {
    if points.outcome.victor() == Some(side) {
        f64::from(points.defensive) / 100.0
    } else {
        0.0
    }
}

fn shared_casualties(share: f64, modifier: f64) -> i64 {
    (share * modifier).floor().max(0.0) as i64
}

/// Applies casualties to a unit; a unit left below its break threshold is
/// destroyed, even when it took no casualties.
fn apply_casualties(mut report: UnitCasualties, casualties: i64, threshold: i64) -> UnitCasualties {
    let remaining = i64::from(report.declared_strength) - casualties;

    report.casualties_taken = u32::try_from(casualties).unwrap_or(u32::MAX);
    report.remaining_strength = if remaining < threshold || remaining < 0 {
        0
    } else {
        u32::try_from(remaining).unwrap_or(u32::MAX)
    };
    report
}

fn force_report(force: &ResolvedForce<'_>, side: Side) -> UnitCasualties {
    UnitCasualties {
        side,
        kind: UnitKind::Force,
        slot: force.unit.slot,
        unit_id: force.def.id.0,
        name: force.def.name.clone(),
        declared_strength: force.unit.declared_strength,
        casualties_taken: 0,
        remaining_strength: force.unit.declared_strength,
    }
}

fn fortification_report(fortification: &ResolvedFortification<'_>, side: Side) -> UnitCasualties {
    UnitCasualties {
        side,
        kind: UnitKind::Fortification,
        slot: fortification.unit.slot,
        unit_id: fortification.def.id.0,
        name: fortification.def.name.clone(),
        declared_strength: fortification.unit.declared_strength,
        casualties_taken: 0,
        remaining_strength: fortification.unit.declared_strength,
    }
}
