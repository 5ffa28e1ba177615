use serde::{Deserialize, Serialize};

use crate::common::{NationId, OrderId};

/// Rule hooks an order can trigger beyond its four numeric modifiers.
///
/// Resolved once when the rule catalog is loaded, so the engine never has to
/// match on order names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderEffect {
    #[default]
    None,
    /// Raises the opposing side's break thresholds.
    Harsh,
    /// Reduces casualties suffered by the other units of the same side.
    Mercy,
    /// The unit suffers no casualties at all.
    LayLow,
    /// Adds extra casualties to besieged barbarian fortifications.
    Siege,
    /// Awards bonus defensive victory points against barbarian offensive orders.
    Disciplined,
    /// Awards bonus offensive victory points against barbarian defensive orders.
    Skirmishing,
    /// Boosts casualties inflicted by every other unit of the same side.
    AlwaysBoostCasualties,
    /// Boosts casualties inflicted by the other offensive units of the same side.
    BoostCasualtiesForOffensiveAllies,
    /// The unit is left out of casualty distribution.
    Exempt,
}

impl OrderEffect {
    /// Maps the order names used by legacy reference data to their effect.
    pub fn from_legacy_name(name: &str) -> Self {
        match name {
            "Cruel" => OrderEffect::Harsh,
            "Tend the Fallen" => OrderEffect::Mercy,
            "Lay Low" => OrderEffect::LayLow,
            "Storm the Walls" => OrderEffect::Siege,
            "Strategic Defence" => OrderEffect::Disciplined,
            "Outmanouvere" => OrderEffect::Skirmishing,
            "Whatever it Takes" => OrderEffect::AlwaysBoostCasualties,
            "Fire in the Blood" => OrderEffect::BoostCasualtiesForOffensiveAllies,
            _ => OrderEffect::None,
        }
    }
}

/// A tactical stance a force can be given for a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDef {
    pub id: OrderId,
    pub name: String,
    pub offensive: bool,
    pub casualties_inflicted_modifier: f64,
    pub casualties_suffered_modifier: f64,
    pub territory_claimed_modifier: f64,
    pub territory_defence_modifier: f64,
    pub effect: OrderEffect,
}

impl OrderDef {
    pub fn has_effect(&self, effect: OrderEffect) -> bool {
        self.effect == effect
    }
}

/// Orders a nation gains or loses on top of the standard ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationOrderRule {
    pub nation_id: NationId,
    #[serde(default)]
    pub grants: Vec<OrderId>,
    #[serde(default)]
    pub revokes: Vec<OrderId>,
}

/// Which orders forces may choose, before quality-specific ones are added.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAvailability {
    /// Orders open to every force.
    pub standard: Vec<OrderId>,
    #[serde(default)]
    pub nations: Vec<NationOrderRule>,
    /// Orders only imperial forces may choose.
    #[serde(default)]
    pub imperial_only: Vec<OrderId>,
}

impl OrderAvailability {
    pub fn nation_rule(&self, nation_id: NationId) -> Option<&NationOrderRule> {
        self.nations.iter().find(|r| r.nation_id == nation_id)
    }

    /// Every order referenced by the availability rules.
    pub fn referenced_orders(&self) -> impl Iterator<Item = &OrderId> {
        self.standard
            .iter()
            .chain(self.imperial_only.iter())
            .chain(
                self.nations
                    .iter()
                    .flat_map(|r| r.grants.iter().chain(r.revokes.iter())),
            )
    }
}
