//! Query logic over a Pokedex dataset.
//!
//! # Overview
//!
//! - [`has_type`] - Whether a creature, or anything it evolves into, has a type
//! - [`list`] - Filter creatures by type and sort them by any field
//! - [`extremum`] - Creature with the largest or smallest value of a feature
//! - [`count_moves`] - Fast plus special attacks of a creature
//! - [`get_by_name`] / [`list_category`] - Name and collection lookups
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_data::Dataset;
//! use pokedex_query::{extremum, list, Extremum, ListQuery};
//!
//! let dataset = Dataset::load("data.json")?;
//!
//! let fire = list(&dataset, &ListQuery::new().with_type("fire").with_sort("name"))?;
//! let heaviest = extremum(&dataset, Extremum::Max, "weight")?;
//! ```

use thiserror::Error;

pub mod engine;
pub mod measure;
mod order;
pub mod types;

pub use engine::{
    count_moves, extremum, get_by_name, list, list_category, Extremum, Feature, ListQuery,
};
pub use types::{capitalize, has_type};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("{creature} has no field `{field}`")]
    MissingField { creature: String, field: String },

    #[error("Field `{field}` of {creature} is not numeric: {value}")]
    NotNumeric {
        creature: String,
        field: String,
        value: String,
    },

    #[error("Values of field `{field}` cannot be compared with each other")]
    Incomparable { field: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown function: {0} (expected max or min)")]
    UnknownFunction(String),
}
