use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a catalog identifier: a transparent wrapper around the integer key
/// used by the reference data.
macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

catalog_id!(
    /// Identifier of an [`crate::orders::OrderDef`].
    OrderId
);
catalog_id!(
    /// Identifier of a [`crate::forces::ForceDef`].
    ForceId
);
catalog_id!(
    /// Identifier of a [`crate::forces::FortificationDef`].
    FortificationId
);
catalog_id!(
    /// Identifier of a [`crate::rituals::ForceRitualDef`].
    ForceRitualId
);
catalog_id!(
    /// Identifier of a [`crate::rituals::FortificationRitualDef`].
    FortificationRitualId
);
catalog_id!(NationId);
catalog_id!(QualityId);

/// One of the two sides taking part in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Imperial,
    Barbarian,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Imperial => write!(f, "imperial"),
            Side::Barbarian => write!(f, "barbarian"),
        }
    }
}

/// Allegiance of a nation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Empire,
    Barbarian,
}

impl Faction {
    /// Name used by the reference data for imperial nations.
    pub const EMPIRE_NAME: &'static str = "The Empire";

    /// Every faction that is not the Empire fights for the barbarians.
    pub fn from_name(name: &str) -> Self {
        if name == Self::EMPIRE_NAME {
            Faction::Empire
        } else {
            Faction::Barbarian
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_from_name() {
        assert_eq!(Faction::from_name("The Empire"), Faction::Empire);
        assert_eq!(Faction::from_name("Barbarian"), Faction::Barbarian);
        assert_eq!(Faction::from_name("Druj"), Faction::Barbarian);
    }

    #[test]
    fn test_catalog_id_serializes_transparently() {
        let id = OrderId(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let parsed: ForceId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, ForceId(7));
    }
}
