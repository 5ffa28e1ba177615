use serde::{Deserialize, Serialize};

use crate::common::{ForceRitualId, FortificationRitualId, QualityId};

/// A ritual cast on a force before battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceRitualDef {
    pub id: ForceRitualId,
    pub name: String,
    /// Whether the ritual targets armies (as opposed to navies).
    pub army_ritual: bool,
    pub quality_id: Option<QualityId>,
    /// Flat amount added to the force's declared strength.
    pub effective_strength_modifier: i32,
    /// Decisive rituals add a flat bonus to the force's victory contribution.
    pub decisive: bool,
}

/// A ritual cast on a fortification before battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortificationRitualDef {
    pub id: FortificationRitualId,
    pub name: String,
    pub effective_strength_modifier: i32,
}
