use std::fmt;
use thiserror::Error;

use crate::{battle::UnitKind, common::Side};

/// Kinds of rule catalog entries a battle can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Order,
    Force,
    Fortification,
    ForceRitual,
    FortificationRitual,
    Nation,
    Quality,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Order => "Order",
            ReferenceKind::Force => "Force",
            ReferenceKind::Fortification => "Fortification",
            ReferenceKind::ForceRitual => "Force ritual",
            ReferenceKind::FortificationRitual => "Fortification ritual",
            ReferenceKind::Nation => "Nation",
            ReferenceKind::Quality => "Quality",
        };
        write!(f, "{name}")
    }
}

/// Errors for battle resolution (game rules).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("{kind} {id} not found in the rule catalog")]
    ReferenceNotFound { kind: ReferenceKind, id: u32 },

    #[error("No eligible {pool} on the {side} side to share casualties between")]
    DivisionDegenerate { side: Side, pool: UnitKind },
}

impl BattleError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BattleError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: ReferenceKind, id: impl Into<u32>) -> Self {
        BattleError::ReferenceNotFound {
            kind,
            id: id.into(),
        }
    }
}
