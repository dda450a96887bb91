//! Exact-match lookups by name

use serde::{Serialize, Serializer};

use crate::creature::Creature;
use crate::dataset::{Category, Dataset};
use crate::record::{MoveRecord, TypeRecord};

/// A record found by name in one of the collections
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Creature(&'a Creature),
    Type(&'a TypeRecord),
    Move(&'a MoveRecord),
}

impl Entry<'_> {
    /// Collection the record came from
    pub fn category(&self) -> Category {
        match self {
            Entry::Creature(_) => Category::Pokemons,
            Entry::Type(_) => Category::Types,
            Entry::Move(_) => Category::Moves,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Creature(creature) => creature.name(),
            Entry::Type(record) | Entry::Move(record) => record.name(),
        }
    }
}

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Creature(creature) => creature.serialize(serializer),
            Entry::Type(record) | Entry::Move(record) => record.serialize(serializer),
        }
    }
}

// Lookups are case-sensitive linear scans returning the first match.
impl Dataset {
    pub fn find_creature_by_name(&self, name: &str) -> Option<&Creature> {
        self.pokemons().iter().find(|creature| creature.name() == name)
    }

    pub fn find_type_by_name(&self, name: &str) -> Option<&TypeRecord> {
        self.types().iter().find(|record| record.name() == name)
    }

    pub fn find_move_by_name(&self, name: &str) -> Option<&MoveRecord> {
        self.moves().iter().find(|record| record.name() == name)
    }

    /// Search creatures, then types, then moves
    pub fn find_by_name(&self, name: &str) -> Option<Entry<'_>> {
        self.find_creature_by_name(name)
            .map(Entry::Creature)
            .or_else(|| self.find_type_by_name(name).map(Entry::Type))
            .or_else(|| self.find_move_by_name(name).map(Entry::Move))
    }
}
