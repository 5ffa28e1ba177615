use std::cmp::Ordering;

use tracing::debug;

use manoeuvres_types::{
    battle::{Outcome, SideTotals, VictoryPoints},
    common::Side,
    orders::{OrderDef, OrderEffect},
};

use crate::rules::BattleRules;

use super::ResolvedForce;

/// Orders declared by one side's forces, split by stance.
///
/// Forces without an order declare nothing.
#[derive(Debug, Default, Clone)]
pub struct DeclaredOrders<'a> {
    pub offensive: Vec<&'a OrderDef>,
    pub defensive: Vec<&'a OrderDef>,
}

impl<'a> DeclaredOrders<'a> {
    pub fn from_forces(forces: &[ResolvedForce<'a>]) -> Self {
        let (offensive, defensive) = forces
            .iter()
            .filter_map(|force| force.order)
            .partition(|order| order.offensive);

        Self {
            offensive,
            defensive,
        }
    }

    pub fn declares(&self, effect: OrderEffect) -> bool {
        self.offensive
            .iter()
            .chain(self.defensive.iter())
            .any(|order| order.has_effect(effect))
    }
}

/// Bonus victory points the Empire earns from its orders against the
/// barbarians' choice of stance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrossOrderBonus {
    /// Defensive points for holding against barbarian offensive orders.
    pub disciplined: i64,
    /// Offensive points for outflanking barbarian defensive orders.
    pub skirmishing: i64,
}

impl CrossOrderBonus {
    pub fn evaluate(
        imperial_orders: &DeclaredOrders<'_>,
        barbarian_orders: &DeclaredOrders<'_>,
        rules: &BattleRules,
    ) -> Self {
        let cap = rules.cross_order_bonus_cap as usize;

        let disciplined = if imperial_orders.declares(OrderEffect::Disciplined) {
            barbarian_orders.offensive.len().min(cap)
        } else {
            0
        };
        let skirmishing = if imperial_orders.declares(OrderEffect::Skirmishing) {
            barbarian_orders.defensive.len().min(cap)
        } else {
            0
        };

        Self {
            disciplined: disciplined as i64,
            skirmishing: skirmishing as i64,
        }
    }
}

/// Decides the outcome and splits the victor's points between offence and
/// defence.
///
/// The total is always the contribution margin in points. Only an imperial
/// victor receives the cross-order bonus, which is added to its halves before
/// they are reconciled against that total.
pub fn resolve_victory_points(
    imperial: &SideTotals,
    barbarian: &SideTotals,
    imperial_orders: &DeclaredOrders<'_>,
    barbarian_orders: &DeclaredOrders<'_>,
    rules: &BattleRules,
) -> VictoryPoints {
    let (victor, winner, loser) = match imperial
        .total_contribution
        .cmp(&barbarian.total_contribution)
    {
        Ordering::Equal => return VictoryPoints::draw(),
        Ordering::Greater => (Side::Imperial, imperial, barbarian),
        Ordering::Less => (Side::Barbarian, barbarian, imperial),
    };

    let difference = winner.total_contribution - loser.total_contribution;
    let margin_points = difference / rules.victory_point_divisor;
    let split = split_margin(winner, difference, margin_points, rules);
    let (mut offensive, mut defensive) = (split.offensive, split.defensive);

    if victor == Side::Imperial {
        let bonus = CrossOrderBonus::evaluate(imperial_orders, barbarian_orders, rules);
        debug!(?bonus, "Imperial cross-order bonus");
        if winner.offensive_contribution > 0 {
            offensive += bonus.skirmishing;
        }
        if winner.defensive_contribution > 0 {
            defensive += bonus.disciplined;
        }
    }

    let (offensive, defensive) =
        reconcile(offensive, defensive, margin_points, split.offence_leads);

    VictoryPoints {
        outcome: Outcome::victory_for(victor),
        total: to_points(margin_points),
        offensive: to_points(offensive),
        defensive: to_points(defensive),
    }
}

/// The victor's margin points divided by its offensive and defensive shares,
/// each floored.
struct MarginSplit {
    offensive: i64,
    defensive: i64,
    /// Whether the offensive share is at least as large as the defensive one.
    offence_leads: bool,
}

fn split_margin(
    winner: &SideTotals,
    difference: i64,
    margin_points: i64,
    rules: &BattleRules,
) -> MarginSplit {
    if winner.offensive_contribution <= 0 {
        return MarginSplit {
            offensive: 0,
            defensive: margin_points,
            offence_leads: false,
        };
    }
    if winner.defensive_contribution <= 0 {
        return MarginSplit {
            offensive: margin_points,
            defensive: 0,
            offence_leads: true,
        };
    }

    let offensive_share =
        winner.offensive_contribution as f64 / winner.total_contribution as f64;
    let defensive_share = 1.0 - offensive_share;
    let divisor = rules.victory_point_divisor as f64;

    MarginSplit {
        offensive: (difference as f64 * offensive_share / divisor).floor() as i64,
        defensive: (difference as f64 * defensive_share / divisor).floor() as i64,
        offence_leads: offensive_share >= defensive_share,
    }
}

/// Moves the difference between `total` and the two halves into the half
/// with the larger share, so that they add up to `total` again.
///
/// A half pushed below zero hands its deficit to the other one.
fn reconcile(offensive: i64, defensive: i64, total: i64, offence_leads: bool) -> (i64, i64) {
    let remainder = total - (offensive + defensive);
    let (mut offensive, mut defensive) = if offence_leads {
        (offensive + remainder, defensive)
    } else {
        (offensive, defensive + remainder)
    };

    if offensive < 0 {
        defensive += offensive;
        offensive = 0;
    }
    if defensive < 0 {
        offensive += defensive;
        defensive = 0;
    }

    (offensive, defensive)
}

fn to_points(points: i64) -> u32 {
    u32::try_from(points.max(0)).unwrap_or(u32::MAX)
}
