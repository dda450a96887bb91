//! Type and move records

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::FieldError;

const NAME: &str = "name";

/// A record identified by its `name` field and otherwise opaque.
///
/// Both the `types` and the `moves` collections are made of these.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRecord {
    name: String,
    raw: Map<String, Value>,
}

/// Entry of the `types` collection
pub type TypeRecord = NamedRecord;

/// Entry of the `moves` collection
pub type MoveRecord = NamedRecord;

impl NamedRecord {
    pub fn from_map(raw: Map<String, Value>) -> Result<Self, FieldError> {
        let name = raw
            .get(NAME)
            .ok_or(FieldError::Missing(NAME))?
            .as_str()
            .ok_or(FieldError::WrongShape {
                field: NAME,
                expected: "a string",
            })?
            .to_string();

        Ok(Self { name, raw })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl TryFrom<Value> for NamedRecord {
    type Error = FieldError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(raw) => Self::from_map(raw),
            _ => Err(FieldError::NotAnObject),
        }
    }
}

impl Serialize for NamedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NamedRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        NamedRecord::try_from(value).map_err(de::Error::custom)
    }
}
