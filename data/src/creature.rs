//! Creature records

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::FieldError;

/// JSON keys used by the creature records
pub mod keys {
    pub const NAME: &str = "Name";
    pub const TYPE_I: &str = "Type I";
    pub const TYPE_II: &str = "Type II";
    pub const WEIGHT: &str = "Weight";
    pub const HEIGHT: &str = "Height";
    pub const FAST_ATTACKS: &str = "Fast Attack(s)";
    pub const SPECIAL_ATTACKS: &str = "Special Attack(s)";
    pub const NEXT_EVOLUTIONS: &str = "Next evolution(s)";
}

/// Reference to the creature a record evolves into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evolution {
    pub name: String,
}

/// A single creature from the `pokemons` collection.
///
/// The fields the query logic relies on are extracted when the record is
/// parsed. Everything else stays reachable through [`Creature::field`], and
/// serialization writes the original object back out with its key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    name: String,
    primary_types: Vec<String>,
    secondary_types: Option<Vec<String>>,
    fast_attacks: Vec<String>,
    special_attacks: Vec<String>,
    next_evolutions: Vec<Evolution>,
    raw: Map<String, Value>,
}

impl Creature {
    /// Parse a creature from its JSON object
    pub fn from_map(raw: Map<String, Value>) -> Result<Self, FieldError> {
        let name = raw
            .get(keys::NAME)
            .ok_or(FieldError::Missing(keys::NAME))?
            .as_str()
            .ok_or(FieldError::WrongShape {
                field: keys::NAME,
                expected: "a string",
            })?
            .to_string();

        let primary_types =
            string_list(&raw, keys::TYPE_I)?.ok_or(FieldError::Missing(keys::TYPE_I))?;
        let secondary_types = string_list(&raw, keys::TYPE_II)?;
        let fast_attacks = string_list(&raw, keys::FAST_ATTACKS)?.unwrap_or_default();
        let special_attacks = string_list(&raw, keys::SPECIAL_ATTACKS)?.unwrap_or_default();
        let next_evolutions = evolutions(&raw)?;

        Ok(Self {
            name,
            primary_types,
            secondary_types,
            fast_attacks,
            special_attacks,
            next_evolutions,
            raw,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Types listed under `Type I`
    pub fn primary_types(&self) -> &[String] {
        &self.primary_types
    }

    /// Types listed under `Type II`, if the record has that field
    pub fn secondary_types(&self) -> Option<&[String]> {
        self.secondary_types.as_deref()
    }

    /// Raw weight string, e.g. `"6,9 kg"`
    pub fn weight(&self) -> Option<&str> {
        self.raw.get(keys::WEIGHT).and_then(Value::as_str)
    }

    /// Raw height string, e.g. `"0,7 m"`
    pub fn height(&self) -> Option<&str> {
        self.raw.get(keys::HEIGHT).and_then(Value::as_str)
    }

    pub fn fast_attacks(&self) -> &[String] {
        &self.fast_attacks
    }

    pub fn special_attacks(&self) -> &[String] {
        &self.special_attacks
    }

    /// Number of fast and special attacks combined
    pub fn move_count(&self) -> usize {
        self.fast_attacks.len() + self.special_attacks.len()
    }

    pub fn next_evolutions(&self) -> &[Evolution] {
        &self.next_evolutions
    }

    /// Look up any field of the original record by its JSON key
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// The original JSON object
    pub fn as_json(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl TryFrom<Value> for Creature {
    type Error = FieldError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(raw) => Self::from_map(raw),
            _ => Err(FieldError::NotAnObject),
        }
    }
}

impl Serialize for Creature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Creature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Creature::try_from(value).map_err(de::Error::custom)
    }
}

/// Read an optional list of strings. `null` counts as absent.
fn string_list(
    raw: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Vec<String>>, FieldError> {
    let wrong_shape = FieldError::WrongShape {
        field,
        expected: "a list of strings",
    };

    match raw.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or(wrong_shape.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(wrong_shape),
    }
}

fn evolutions(raw: &Map<String, Value>) -> Result<Vec<Evolution>, FieldError> {
    let wrong_shape = FieldError::WrongShape {
        field: keys::NEXT_EVOLUTIONS,
        expected: "a list of objects with a string `Name`",
    };

    match raw.get(keys::NEXT_EVOLUTIONS) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.get(keys::NAME)
                    .and_then(Value::as_str)
                    .map(|name| Evolution {
                        name: name.to_string(),
                    })
                    .ok_or(wrong_shape.clone())
            })
            .collect(),
        Some(_) => Err(wrong_shape),
    }
}
