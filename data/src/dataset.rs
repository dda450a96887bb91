//! The in-memory dataset and its named collections

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::creature::Creature;
use crate::record::{MoveRecord, NamedRecord, TypeRecord};
use crate::{DataError, FieldError};

/// Named collections of the dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pokemons,
    Types,
    Moves,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pokemons, Category::Types, Category::Moves];

    /// Key of the collection in the dataset file
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pokemons => "pokemons",
            Category::Types => "types",
            Category::Moves => "moves",
        }
    }
}

impl FromStr for Category {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DataError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of one whole collection, serialized as a JSON array
#[derive(Debug, Clone, Copy)]
pub enum Collection<'a> {
    Pokemons(&'a [Creature]),
    Types(&'a [TypeRecord]),
    Moves(&'a [MoveRecord]),
}

impl Collection<'_> {
    pub fn len(&self) -> usize {
        match self {
            Collection::Pokemons(items) => items.len(),
            Collection::Types(items) => items.len(),
            Collection::Moves(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Collection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Collection::Pokemons(items) => items.serialize(serializer),
            Collection::Types(items) => items.serialize(serializer),
            Collection::Moves(items) => items.serialize(serializer),
        }
    }
}

/// Every creature, type and move known to the service.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pokemons: Vec<Creature>,
    types: Vec<TypeRecord>,
    moves: Vec<MoveRecord>,
}

impl Dataset {
    /// Assemble a dataset, rejecting duplicate names within a collection
    pub fn new(
        pokemons: Vec<Creature>,
        types: Vec<TypeRecord>,
        moves: Vec<MoveRecord>,
    ) -> Result<Self, DataError> {
        ensure_unique(Category::Pokemons, pokemons.iter().map(Creature::name))?;
        ensure_unique(Category::Types, types.iter().map(NamedRecord::name))?;
        ensure_unique(Category::Moves, moves.iter().map(NamedRecord::name))?;

        let dataset = Self {
            pokemons,
            types,
            moves,
        };
        dataset.warn_dangling_evolutions();
        Ok(dataset)
    }

    /// Read and validate the dataset file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading dataset");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DataError> {
        let Value::Object(mut root) = value else {
            return Err(DataError::NotAnObject);
        };

        let pokemons = parse_collection(&mut root, Category::Pokemons, Creature::from_map)?;
        let types = parse_collection(&mut root, Category::Types, NamedRecord::from_map)?;
        let moves = parse_collection(&mut root, Category::Moves, NamedRecord::from_map)?;

        Self::new(pokemons, types, moves)
    }

    pub fn pokemons(&self) -> &[Creature] {
        &self.pokemons
    }

    pub fn types(&self) -> &[TypeRecord] {
        &self.types
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// The whole collection for `category`, in file order
    pub fn collection(&self, category: Category) -> Collection<'_> {
        match category {
            Category::Pokemons => Collection::Pokemons(&self.pokemons),
            Category::Types => Collection::Types(&self.types),
            Category::Moves => Collection::Moves(&self.moves),
        }
    }

    fn warn_dangling_evolutions(&self) {
        for creature in &self.pokemons {
            for evolution in creature.next_evolutions() {
                if self.find_creature_by_name(&evolution.name).is_none() {
                    tracing::warn!(
                        creature = creature.name(),
                        evolution = %evolution.name,
                        "Evolution does not resolve to a known creature"
                    );
                }
            }
        }
    }
}

fn parse_collection<T>(
    root: &mut Map<String, Value>,
    category: Category,
    parse: impl Fn(Map<String, Value>) -> Result<T, FieldError>,
) -> Result<Vec<T>, DataError> {
    let collection = category.as_str();
    let items = match root.remove(collection) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(DataError::NotAnArray(collection)),
        None => return Err(DataError::MissingCollection(collection)),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let record = match item {
                Value::Object(raw) => parse(raw),
                _ => Err(FieldError::NotAnObject),
            };
            record.map_err(|source| DataError::InvalidRecord {
                collection,
                index,
                source,
            })
        })
        .collect()
}

fn ensure_unique<'a>(
    category: Category,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(DataError::DuplicateName {
                collection: category.as_str(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
