use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{ForceId, ForceRitualId, FortificationId, FortificationRitualId, OrderId, Side};

/// A force committed to battle by one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedForce {
    pub side: Side,
    /// Position of the entry in its side's force list.
    pub slot: usize,
    pub force_id: ForceId,
    pub order_id: Option<OrderId>,
    pub ritual_id: Option<ForceRitualId>,
    pub declared_strength: u32,
}

/// A fortification committed to battle by one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedFortification {
    pub side: Side,
    pub slot: usize,
    pub fortification_id: FortificationId,
    pub ritual_id: Option<FortificationRitualId>,
    pub declared_strength: u32,
    pub besieged: bool,
}

/// Everything both sides committed to a single battle.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSubmission {
    pub imperial_forces: Vec<CommittedForce>,
    pub imperial_fortifications: Vec<CommittedFortification>,
    pub barbarian_forces: Vec<CommittedForce>,
    pub barbarian_fortifications: Vec<CommittedFortification>,
}

impl BattleSubmission {
    pub fn forces(&self, side: Side) -> &[CommittedForce] {
        match side {
            Side::Imperial => &self.imperial_forces,
            Side::Barbarian => &self.barbarian_forces,
        }
    }

    pub fn fortifications(&self, side: Side) -> &[CommittedFortification] {
        match side {
            Side::Imperial => &self.imperial_fortifications,
            Side::Barbarian => &self.barbarian_fortifications,
        }
    }
}

/// What a single unit brings to the battle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UnitContribution {
    pub casualties_inflicted: f64,
    pub offensive: f64,
    pub defensive: f64,
}

/// Totals for one side, recomputed on every resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideTotals {
    pub casualties_inflicted: i64,
    pub offensive_contribution: i64,
    pub defensive_contribution: i64,
    pub total_contribution: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    ImperialVictory,
    BarbarianVictory,
    Draw,
}

impl Outcome {
    pub fn victor(&self) -> Option<Side> {
        match self {
            Outcome::ImperialVictory => Some(Side::Imperial),
            Outcome::BarbarianVictory => Some(Side::Barbarian),
            Outcome::Draw => None,
        }
    }

    pub fn victory_for(side: Side) -> Self {
        match side {
            Side::Imperial => Outcome::ImperialVictory,
            Side::Barbarian => Outcome::BarbarianVictory,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::ImperialVictory => write!(f, "Imperial Victory"),
            Outcome::BarbarianVictory => write!(f, "Barbarian Victory"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Victory points awarded to the victor, split by axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryPoints {
    pub outcome: Outcome,
    pub total: u32,
    pub offensive: u32,
    pub defensive: u32,
}

impl VictoryPoints {
    pub fn draw() -> Self {
        Self {
            outcome: Outcome::Draw,
            total: 0,
            offensive: 0,
            defensive: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Force,
    Fortification,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Force => write!(f, "forces"),
            UnitKind::Fortification => write!(f, "fortifications"),
        }
    }
}

/// Casualties taken by a single committed unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCasualties {
    pub side: Side,
    pub kind: UnitKind,
    pub slot: usize,
    /// Catalog id of the force or fortification.
    pub unit_id: u32,
    pub name: String,
    pub declared_strength: u32,
    pub casualties_taken: u32,
    pub remaining_strength: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub outcome: Outcome,
    pub total_victory_points: u32,
    pub offensive_victory_points: u32,
    pub defensive_victory_points: u32,
    pub imperial: SideTotals,
    pub barbarian: SideTotals,
    pub casualties: Vec<UnitCasualties>,
}

impl ResolutionResult {
    /// Casualties of the unit committed at `slot` of the given side and kind.
    pub fn casualties_for(&self, side: Side, kind: UnitKind, slot: usize) -> Option<&UnitCasualties> {
        self.casualties
            .iter()
            .find(|c| c.side == side && c.kind == kind && c.slot == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::ImperialVictory.to_string(), "Imperial Victory");
        assert_eq!(Outcome::BarbarianVictory.to_string(), "Barbarian Victory");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_outcome_victor() {
        assert_eq!(Outcome::ImperialVictory.victor(), Some(Side::Imperial));
        assert_eq!(Outcome::BarbarianVictory.victor(), Some(Side::Barbarian));
        assert_eq!(Outcome::Draw.victor(), None);
        assert_eq!(Outcome::victory_for(Side::Barbarian), Outcome::BarbarianVictory);
    }
}
