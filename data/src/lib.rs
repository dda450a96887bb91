//! Read-only dataset model for the Pokedex API.
//!
//! A [`Dataset`] is loaded once from a JSON file holding three named
//! collections (`pokemons`, `types`, `moves`) and is never mutated
//! afterwards. Records keep their original JSON object so they can be
//! served back unchanged, while the fields the query logic depends on are
//! extracted and validated at load time.
//!
//! ```text
//! pokedex-data (records + lookups) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-query (type resolution, filters, extrema)
//!        │
//!        ▼
//! pokedex-server (HTTP API)
//! ```

use thiserror::Error;

pub mod creature;
pub mod dataset;
pub mod lookup;
pub mod record;

pub use creature::{Creature, Evolution};
pub use dataset::{Category, Collection, Dataset};
pub use lookup::Entry;
pub use record::{MoveRecord, NamedRecord, TypeRecord};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset root must be a JSON object")]
    NotAnObject,

    #[error("Missing collection: {0}")]
    MissingCollection(&'static str),

    #[error("Collection {0} must be a JSON array")]
    NotAnArray(&'static str),

    #[error("Invalid record {collection}[{index}]: {source}")]
    InvalidRecord {
        collection: &'static str,
        index: usize,
        #[source]
        source: FieldError,
    },

    #[error("Duplicate name in {collection}: {name}")]
    DuplicateName {
        collection: &'static str,
        name: String,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Shape problem in a single record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    Missing(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongShape {
        field: &'static str,
        expected: &'static str,
    },
}
