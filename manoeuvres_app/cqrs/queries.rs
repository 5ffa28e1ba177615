use manoeuvres_types::{
    common::{ForceId, FortificationId, Side},
    forces::{ForceDef, FortificationDef},
    orders::OrderDef,
    reports::BattleReport,
    rituals::{ForceRitualDef, FortificationRitualDef},
};

use crate::{cqrs::Query, submission::RawBattleSubmission};

/// Orders a force may be given, offensive orders first.
pub struct GetAvailableOrders {
    pub force_id: ForceId,
}

impl Query for GetAvailableOrders {
    type Output = Vec<OrderDef>;
}

/// Forces a side may commit to battle.
pub struct GetForceOptions {
    pub side: Side,
}

impl Query for GetForceOptions {
    type Output = Vec<ForceDef>;
}

/// Fortifications held by a side.
pub struct GetFortificationOptions {
    pub side: Side,
}

impl Query for GetFortificationOptions {
    type Output = Vec<FortificationDef>;
}

/// Maximum strength of a fortification, used to pre-fill its declared strength.
pub struct GetFortificationStrength {
    pub fortification_id: FortificationId,
}

impl Query for GetFortificationStrength {
    type Output = u32;
}

/// Rituals that can be cast on a force.
pub struct GetRitualOptions {
    pub force_id: ForceId,
}

impl Query for GetRitualOptions {
    type Output = Vec<ForceRitualDef>;
}

pub struct GetFortificationRitualOptions;

impl Query for GetFortificationRitualOptions {
    type Output = Vec<FortificationRitualDef>;
}

/// Resolves a battle submitted by the players.
pub struct ResolveBattle {
    pub submission: RawBattleSubmission,
}

impl Query for ResolveBattle {
    type Output = BattleReport;
}
