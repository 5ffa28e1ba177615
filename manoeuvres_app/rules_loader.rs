//! Loading of the rule catalog snapshot.
//!
//! The snapshot is a JSON document exported from the reference data. Special
//! order effects are tagged here, once, so the engine never matches names.
use serde::Deserialize;
use std::path::Path;

use manoeuvres_game::catalog::RuleBook;
use manoeuvres_types::{
    common::{Faction, ForceRitualId, FortificationId, NationId, OrderId, QualityId, Side},
    errors::{AppError, ApplicationError},
    forces::{ForceDef, FortificationDef, NationDef, QualityDef},
    orders::{OrderAvailability, OrderDef, OrderEffect},
    rituals::{ForceRitualDef, FortificationRitualDef},
};

/// Order that sends a force home, out of reach of any casualties.
pub const EXEMPT_ORDER_ID: u32 = 42;
/// Force ritual granting a decisive victory bonus.
pub const DECISIVE_RITUAL_ID: u32 = 2;
/// Fortifications with a lower id belong to the barbarians.
pub const FIRST_IMPERIAL_FORTIFICATION_ID: u32 = 6;

#[derive(Debug, Deserialize)]
pub struct RuleSnapshot {
    #[serde(default)]
    pub nations: Vec<NationRecord>,
    #[serde(default)]
    pub qualities: Vec<QualityRecord>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub forces: Vec<ForceDef>,
    #[serde(default)]
    pub fortifications: Vec<FortificationRecord>,
    #[serde(default)]
    pub force_rituals: Vec<ForceRitualRecord>,
    #[serde(default)]
    pub fortification_rituals: Vec<FortificationRitualDef>,
    #[serde(default)]
    pub order_availability: OrderAvailability,
}

#[derive(Debug, Deserialize)]
pub struct NationRecord {
    pub id: NationId,
    pub name: String,
    pub faction: String,
}

#[derive(Debug, Deserialize)]
pub struct QualityRecord {
    pub id: QualityId,
    pub name: String,
    #[serde(default)]
    pub orders: Vec<OrderId>,
}

#[derive(Debug, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub name: String,
    pub offensive: bool,
    #[serde(default)]
    pub casualties_inflicted_modifier: f64,
    #[serde(default)]
    pub casualties_suffered_modifier: f64,
    #[serde(default)]
    pub territory_claimed_modifier: f64,
    #[serde(default)]
    pub territory_defence_modifier: f64,
    pub effect: Option<OrderEffect>,
}

#[derive(Debug, Deserialize)]
pub struct FortificationRecord {
    pub id: FortificationId,
    pub name: String,
    #[serde(default)]
    pub level: u32,
    pub maximum_strength: u32,
    pub held_by: Option<Side>,
}

#[derive(Debug, Deserialize)]
pub struct ForceRitualRecord {
    pub id: ForceRitualId,
    pub name: String,
    pub army_ritual: bool,
    pub quality_id: Option<QualityId>,
    #[serde(default)]
    pub effective_strength_modifier: i32,
    pub decisive: Option<bool>,
}

impl OrderRecord {
    fn into_def(self) -> OrderDef {
        let effect = match self.effect {
            Some(effect) => effect,
            None if self.id.0 == EXEMPT_ORDER_ID => OrderEffect::Exempt,
            None => OrderEffect::from_legacy_name(&self.name),
        };

        OrderDef {
            id: self.id,
            name: self.name,
            offensive: self.offensive,
            casualties_inflicted_modifier: self.casualties_inflicted_modifier,
            casualties_suffered_modifier: self.casualties_suffered_modifier,
            territory_claimed_modifier: self.territory_claimed_modifier,
            territory_defence_modifier: self.territory_defence_modifier,
            effect,
        }
    }
}

impl RuleSnapshot {
    /// Builds the rule book, checking every cross reference first.
    pub fn into_rule_book(self) -> Result<RuleBook, AppError> {
        self.check_references()?;

        let mut book = RuleBook::new().with_availability(self.order_availability);

        for nation in self.nations {
            book = book.with_nation(NationDef {
                id: nation.id,
                faction: Faction::from_name(&nation.faction),
                name: nation.name,
            });
        }
        for quality in self.qualities {
            book = book.with_quality(QualityDef {
                id: quality.id,
                name: quality.name,
                orders: quality.orders,
            });
        }
        for order in self.orders {
            book = book.with_order(order.into_def());
        }
        for force in self.forces {
            book = book.with_force(force);
        }
        for fortification in self.fortifications {
            let held_by = fortification.held_by.unwrap_or(
                if fortification.id.0 < FIRST_IMPERIAL_FORTIFICATION_ID {
                    Side::Barbarian
                } else {
                    Side::Imperial
                },
            );
            book = book.with_fortification(FortificationDef {
                id: fortification.id,
                name: fortification.name,
                level: fortification.level,
                maximum_strength: fortification.maximum_strength,
                held_by,
            });
        }
        for ritual in self.force_rituals {
            book = book.with_force_ritual(ForceRitualDef {
                decisive: ritual
                    .decisive
                    .unwrap_or(ritual.id.0 == DECISIVE_RITUAL_ID),
                id: ritual.id,
                name: ritual.name,
                army_ritual: ritual.army_ritual,
                quality_id: ritual.quality_id,
                effective_strength_modifier: ritual.effective_strength_modifier,
            });
        }
        for ritual in self.fortification_rituals {
            book = book.with_fortification_ritual(ritual);
        }

        Ok(book)
    }

    fn check_references(&self) -> Result<(), AppError> {
        let has_nation = |id: NationId| self.nations.iter().any(|n| n.id == id);
        let has_quality = |id: QualityId| self.qualities.iter().any(|q| q.id == id);
        let has_order = |id: OrderId| self.orders.iter().any(|o| o.id == id);

        for force in &self.forces {
            if !has_nation(force.nation_id) {
                return Err(inconsistent(format!(
                    "force {} refers to unknown nation {}",
                    force.id, force.nation_id
                )));
            }
            if !has_quality(force.quality_id) {
                return Err(inconsistent(format!(
                    "force {} refers to unknown quality {}",
                    force.id, force.quality_id
                )));
            }
        }

        for quality in &self.qualities {
            if let Some(order) = quality.orders.iter().find(|id| !has_order(**id)) {
                return Err(inconsistent(format!(
                    "quality {} unlocks unknown order {order}",
                    quality.id
                )));
            }
        }

        for ritual in &self.force_rituals {
            if let Some(quality) = ritual.quality_id.filter(|id| !has_quality(*id)) {
                return Err(inconsistent(format!(
                    "force ritual {} refers to unknown quality {quality}",
                    ritual.id
                )));
            }
        }

        let availability = &self.order_availability;
        if let Some(order) = availability.referenced_orders().find(|id| !has_order(**id)) {
            return Err(inconsistent(format!(
                "order availability refers to unknown order {order}"
            )));
        }
        if let Some(rule) = availability.nations.iter().find(|r| !has_nation(r.nation_id)) {
            return Err(inconsistent(format!(
                "order availability refers to unknown nation {}",
                rule.nation_id
            )));
        }

        Ok(())
    }
}

fn inconsistent(reason: String) -> AppError {
    AppError::InconsistentCatalog(reason)
}

/// Parses a catalog snapshot from a JSON string.
pub fn load_rule_book_from_json(json: &str) -> Result<RuleBook, ApplicationError> {
    let snapshot: RuleSnapshot = serde_json::from_str(json)?;
    Ok(snapshot.into_rule_book()?)
}

/// Reads a catalog snapshot from disk.
pub fn load_rule_book(path: &Path) -> Result<RuleBook, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::CatalogUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    load_rule_book_from_json(&content)
}

#[cfg(test)]
mod tests {
    use manoeuvres_game::catalog::RuleCatalog;

    use super::*;

    const SNAPSHOT: &str = r#"{
        "nations": [
            { "id": 1, "name": "Highguard", "faction": "The Empire" },
            { "id": 2, "name": "Druj", "faction": "Barbarian" }
        ],
        "qualities": [
            { "id": 1, "name": "None" },
            { "id": 2, "name": "Healers", "orders": [6] }
        ],
        "orders": [
            { "id": 1, "name": "Overwhelm", "offensive": true, "territory_claimed_modifier": 0.2 },
            { "id": 5, "name": "Cruel", "offensive": true },
            { "id": 6, "name": "Tend the Fallen", "offensive": false },
            { "id": 9, "name": "Rally", "offensive": false, "effect": "Disciplined" },
            { "id": 42, "name": "Sent Home", "offensive": false }
        ],
        "forces": [
            { "id": 1, "name": "Imperial Legion", "is_army": true, "nation_id": 1, "quality_id": 2, "large": false }
        ],
        "fortifications": [
            { "id": 1, "name": "Orc Stockade", "level": 1, "maximum_strength": 2000 },
            { "id": 6, "name": "Imperial Fortress", "level": 3, "maximum_strength": 5000 }
        ],
        "force_rituals": [
            { "id": 1, "name": "Strength of the Bear", "army_ritual": true, "effective_strength_modifier": 500 },
            { "id": 2, "name": "Decisive Victory", "army_ritual": true }
        ],
        "fortification_rituals": [
            { "id": 1, "name": "Stone Skin", "effective_strength_modifier": 1000 }
        ],
        "order_availability": { "standard": [1, 5], "imperial_only": [5] }
    }"#;

    #[test]
    fn test_load_snapshot_tags_effects() {
        let book = load_rule_book_from_json(SNAPSHOT).unwrap();

        assert_eq!(book.order(OrderId(1)).unwrap().effect, OrderEffect::None);
        assert_eq!(book.order(OrderId(5)).unwrap().effect, OrderEffect::Harsh);
        assert_eq!(book.order(OrderId(6)).unwrap().effect, OrderEffect::Mercy);
        assert_eq!(book.order(OrderId(9)).unwrap().effect, OrderEffect::Disciplined);
        assert_eq!(book.order(OrderId(42)).unwrap().effect, OrderEffect::Exempt);

        assert!(!book.force_ritual(ForceRitualId(1)).unwrap().decisive);
        assert!(book.force_ritual(ForceRitualId(2)).unwrap().decisive);

        assert_eq!(book.nation(NationId(1)).unwrap().faction, Faction::Empire);
        assert_eq!(book.nation(NationId(2)).unwrap().faction, Faction::Barbarian);
    }

    #[test]
    fn test_fortification_side_defaults_by_id() {
        let book = load_rule_book_from_json(SNAPSHOT).unwrap();

        let stockade = book.fortification(FortificationId(1)).unwrap();
        assert_eq!(stockade.held_by, Side::Barbarian);
        let fortress = book.fortification(FortificationId(6)).unwrap();
        assert_eq!(fortress.held_by, Side::Imperial);
    }

    #[test]
    fn test_dangling_reference_is_rejected() {
        let json = SNAPSHOT.replace(r#""quality_id": 2"#, r#""quality_id": 9"#);
        let err = load_rule_book_from_json(&json).unwrap_err();

        match err {
            ApplicationError::App(AppError::InconsistentCatalog(reason)) => {
                assert_eq!(reason, "force 1 refers to unknown quality 9");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_order_in_availability_is_rejected() {
        let json = SNAPSHOT.replace(r#""standard": [1, 5]"#, r#""standard": [1, 7]"#);
        let err = load_rule_book_from_json(&json).unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::App(AppError::InconsistentCatalog(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_rule_book(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::App(AppError::CatalogUnreadable { .. })
        ));
    }
}
