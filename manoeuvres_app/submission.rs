//! Ingestion of raw battle submissions.
//!
//! Clients post identifiers and strengths the way a web form does: as
//! strings, with an empty string meaning "nothing chosen". Everything is
//! checked and typed here, before the engine sees it.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use manoeuvres_types::{
    battle::{BattleSubmission, CommittedForce, CommittedFortification},
    common::{ForceId, ForceRitualId, FortificationId, FortificationRitualId, OrderId, Side},
    errors::BattleError,
};

/// Longest strength a player can declare, in digits.
const MAX_STRENGTH_DIGITS: usize = 4;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForce {
    #[serde(default)]
    pub force: Value,
    #[serde(default)]
    pub order: Value,
    #[serde(default)]
    pub ritual: Value,
    #[serde(default)]
    pub strength: Value,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFortification {
    #[serde(default)]
    pub fortification: Value,
    #[serde(default)]
    pub ritual: Value,
    #[serde(default)]
    pub strength: Value,
    #[serde(default)]
    pub besieged: Value,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBattleSubmission {
    #[serde(default)]
    pub imperial_forces: Vec<RawForce>,
    #[serde(default)]
    pub imperial_fortifications: Vec<RawFortification>,
    #[serde(default)]
    pub barbarian_forces: Vec<RawForce>,
    #[serde(default)]
    pub barbarian_fortifications: Vec<RawFortification>,
}

impl RawBattleSubmission {
    /// Types every unit, tagging it with its side and position.
    pub fn ingest(&self) -> Result<BattleSubmission, BattleError> {
        Ok(BattleSubmission {
            imperial_forces: ingest_forces(Side::Imperial, &self.imperial_forces)?,
            imperial_fortifications: ingest_fortifications(
                Side::Imperial,
                &self.imperial_fortifications,
            )?,
            barbarian_forces: ingest_forces(Side::Barbarian, &self.barbarian_forces)?,
            barbarian_fortifications: ingest_fortifications(
                Side::Barbarian,
                &self.barbarian_fortifications,
            )?,
        })
    }
}

fn ingest_forces(side: Side, forces: &[RawForce]) -> Result<Vec<CommittedForce>, BattleError> {
    forces
        .iter()
        .enumerate()
        .map(|(slot, raw)| -> Result<CommittedForce, BattleError> {
            let field = |name: &str| format!("{side}_forces[{slot}].{name}");

            Ok(CommittedForce {
                side,
                slot,
                force_id: ForceId(required_id(&raw.force, field("force"))?),
                order_id: optional_id(&raw.order, field("order"))?.map(OrderId),
                ritual_id: optional_id(&raw.ritual, field("ritual"))?.map(ForceRitualId),
                declared_strength: strength(&raw.strength, field("strength"))?,
            })
        })
        .collect()
}

fn ingest_fortifications(
    side: Side,
    fortifications: &[RawFortification],
) -> Result<Vec<CommittedFortification>, BattleError> {
    fortifications
        .iter()
        .enumerate()
        .map(|(slot, raw)| -> Result<CommittedFortification, BattleError> {
            let field = |name: &str| format!("{side}_fortifications[{slot}].{name}");

            Ok(CommittedFortification {
                side,
                slot,
                fortification_id: FortificationId(required_id(
                    &raw.fortification,
                    field("fortification"),
                )?),
                ritual_id: optional_id(&raw.ritual, field("ritual"))?.map(FortificationRitualId),
                declared_strength: strength(&raw.strength, field("strength"))?,
                besieged: flag(&raw.besieged, field("besieged"))?,
            })
        })
        .collect()
}

/// An identifier that may be left empty.
fn optional_id(value: &Value, field: String) -> Result<Option<u32>, BattleError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| BattleError::invalid_input(field, format!("{s:?} is not an identifier"))),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| BattleError::invalid_input(field, format!("{n} is not an identifier"))),
        other => Err(BattleError::invalid_input(
            field,
            format!("expected an identifier, got {other}"),
        )),
    }
}

fn required_id(value: &Value, field: String) -> Result<u32, BattleError> {
    optional_id(value, field.clone())?
        .ok_or_else(|| BattleError::invalid_input(field, "an identifier is required"))
}

/// A declared strength: up to four digits.
fn strength(value: &Value, field: String) -> Result<u32, BattleError> {
    let digits = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) if n.is_u64() => n.to_string(),
        Value::Null => String::new(),
        other => {
            return Err(BattleError::invalid_input(
                field,
                format!("expected a strength, got {other}"),
            ));
        }
    };

    if digits.is_empty() {
        return Err(BattleError::invalid_input(field, "a strength is required"));
    }
    if digits.len() > MAX_STRENGTH_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BattleError::invalid_input(
            field,
            format!("{digits:?} is not a number of at most {MAX_STRENGTH_DIGITS} digits"),
        ));
    }

    digits
        .parse::<u32>()
        .map_err(|_| BattleError::invalid_input(field, format!("{digits:?} is not a number")))
}

fn flag(value: &Value, field: String) -> Result<bool, BattleError> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "false" | "off" | "no" => Ok(false),
            "true" | "on" | "yes" => Ok(true),
            _ => Err(BattleError::invalid_input(
                field,
                format!("{s:?} is not a yes/no value"),
            )),
        },
        other => Err(BattleError::invalid_input(
            field,
            format!("expected a yes/no value, got {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn submission(value: Value) -> RawBattleSubmission {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ingest_form_strings() {
        let raw = submission(json!({
            "imperial_forces": [
                { "force": "1", "order": "2", "ritual": "", "strength": "5000" },
                { "force": 3, "order": "", "ritual": 1, "strength": 1200 }
            ],
            "barbarian_fortifications": [
                { "fortification": "1", "ritual": "", "strength": "2000", "besieged": true }
            ]
        }));

        let battle = raw.ingest().unwrap();

        assert_eq!(battle.imperial_forces.len(), 2);
        let first = &battle.imperial_forces[0];
        assert_eq!(first.side, Side::Imperial);
        assert_eq!(first.slot, 0);
        assert_eq!(first.force_id, ForceId(1));
        assert_eq!(first.order_id, Some(OrderId(2)));
        assert_eq!(first.ritual_id, None);
        assert_eq!(first.declared_strength, 5000);

        let second = &battle.imperial_forces[1];
        assert_eq!(second.slot, 1);
        assert_eq!(second.order_id, None);
        assert_eq!(second.ritual_id, Some(ForceRitualId(1)));

        let stockade = &battle.barbarian_fortifications[0];
        assert_eq!(stockade.side, Side::Barbarian);
        assert!(stockade.besieged);
        assert!(battle.barbarian_forces.is_empty());
    }

    #[test]
    fn test_strength_must_be_four_digits() {
        let raw = submission(json!({
            "barbarian_forces": [{ "force": "3", "strength": "12000" }]
        }));
        let err = raw.ingest().unwrap_err();
        assert!(
            matches!(err, BattleError::InvalidInput { ref field, .. } if field == "barbarian_forces[0].strength")
        );

        for bad in [json!(""), json!("12a"), json!(-5), json!(null), json!("1.5")] {
            let raw = submission(json!({
                "imperial_forces": [{ "force": "1", "strength": bad }]
            }));
            assert!(raw.ingest().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_missing_unit_id_is_rejected() {
        let raw = submission(json!({
            "imperial_fortifications": [{ "fortification": "", "strength": "1000" }]
        }));
        let err = raw.ingest().unwrap_err();

        assert_eq!(
            err,
            BattleError::InvalidInput {
                field: "imperial_fortifications[0].fortification".to_string(),
                reason: "an identifier is required".to_string(),
            }
        );
    }

    #[test]
    fn test_non_numeric_order_is_rejected() {
        let raw = submission(json!({
            "imperial_forces": [{ "force": "1", "order": "Overwhelm", "strength": "100" }]
        }));
        assert!(raw.ingest().is_err());
    }

    #[test]
    fn test_besieged_accepts_form_values() {
        for (value, expected) in [
            (json!("on"), true),
            (json!("true"), true),
            (json!(""), false),
            (json!(false), false),
            (json!(null), false),
        ] {
            let raw = submission(json!({
                "imperial_fortifications": [
                    { "fortification": "6", "strength": "5000", "besieged": value }
                ]
            }));
            assert_eq!(raw.ingest().unwrap().imperial_fortifications[0].besieged, expected);
        }
    }
}
