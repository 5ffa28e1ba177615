use serde::{Deserialize, Serialize};

use crate::common::{Faction, ForceId, FortificationId, NationId, OrderId, QualityId, Side};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationDef {
    pub id: NationId,
    pub name: String,
    pub faction: Faction,
}

/// A quality shared by some forces, unlocking extra orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityDef {
    pub id: QualityId,
    pub name: String,
    pub orders: Vec<OrderId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceDef {
    pub id: ForceId,
    pub name: String,
    pub is_army: bool,
    pub nation_id: NationId,
    pub quality_id: QualityId,
    /// Large forces break at a higher strength.
    pub large: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortificationDef {
    pub id: FortificationId,
    pub name: String,
    pub level: u32,
    pub maximum_strength: u32,
    /// The side that garrisons this kind of fortification.
    pub held_by: Side,
}
