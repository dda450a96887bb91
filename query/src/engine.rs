//! Filtering, sorting, extrema and counts over the dataset

use std::cmp::Ordering;
use std::str::FromStr;

use pokedex_data::creature::keys;
use pokedex_data::{Category, Collection, Creature, Dataset, Entry};

use crate::measure::{coerce_number, parse_height, parse_weight};
use crate::order;
use crate::types::{capitalize, has_type};
use crate::QueryError;

/// Parameters of a creature listing. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Keep only creatures having this type (capitalized before use)
    pub type_name: Option<String>,
    /// Sort ascending by this field (capitalized before use)
    pub sort_by: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }
}

/// List creatures, optionally filtered by type and sorted by a field.
///
/// Without a sort the dataset order is kept. Sorting is stable and uses the
/// natural order of the raw field values; every creature must carry the
/// field and all values must be of one kind.
pub fn list<'a>(dataset: &'a Dataset, query: &ListQuery) -> Result<Vec<&'a Creature>, QueryError> {
    let mut creatures: Vec<&Creature> = match non_empty(&query.type_name) {
        Some(type_name) => {
            let target_type = capitalize(type_name);
            dataset
                .pokemons()
                .iter()
                .filter(|creature| has_type(dataset, &target_type, creature))
                .collect()
        }
        None => dataset.pokemons().iter().collect(),
    };

    if let Some(field) = non_empty(&query.sort_by) {
        sort_by_field(&mut creatures, &capitalize(field))?;
    }

    Ok(creatures)
}

/// The raw collection named by `category`
pub fn list_category<'a>(dataset: &'a Dataset, category: &str) -> Result<Collection<'a>, QueryError> {
    let category = Category::from_str(category)
        .map_err(|_| QueryError::UnknownCategory(category.to_string()))?;
    Ok(dataset.collection(category))
}

/// First creature, then type, then move with exactly this name
pub fn get_by_name<'a>(dataset: &'a Dataset, name: &str) -> Option<Entry<'a>> {
    dataset.find_by_name(name)
}

/// Number of fast and special attacks of the named creature
pub fn count_moves(dataset: &Dataset, name: &str) -> Option<usize> {
    dataset
        .find_creature_by_name(name)
        .map(Creature::move_count)
}

/// Which end of the range [`extremum`] selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    fn prefers(self, candidate: f64, current: f64) -> bool {
        match self {
            Extremum::Max => candidate > current,
            Extremum::Min => candidate < current,
        }
    }
}

impl FromStr for Extremum {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max" => Ok(Extremum::Max),
            "min" => Ok(Extremum::Min),
            _ => Err(QueryError::UnknownFunction(s.to_string())),
        }
    }
}

/// A numeric creature feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature<'a> {
    /// `Weight`, parsed from `"6,9 kg"` notation
    Weight,
    /// `Height`, parsed from `"0,7 m"` notation
    Height,
    /// Any other field, read by its exact key
    Field(&'a str),
}

impl<'a> Feature<'a> {
    /// `weight` and `height` match in any case; anything else is a field key
    pub fn parse(feature: &'a str) -> Self {
        match feature.to_lowercase().as_str() {
            "weight" => Feature::Weight,
            "height" => Feature::Height,
            _ => Feature::Field(feature),
        }
    }

    /// Record key the feature is read from
    pub fn key(&self) -> &'a str {
        match *self {
            Feature::Weight => keys::WEIGHT,
            Feature::Height => keys::HEIGHT,
            Feature::Field(key) => key,
        }
    }

    pub fn value_of(&self, creature: &Creature) -> Result<f64, QueryError> {
        let key = self.key();
        let raw = creature
            .field(key)
            .ok_or_else(|| QueryError::MissingField {
                creature: creature.name().to_string(),
                field: key.to_string(),
            })?;

        let value = match self {
            Feature::Weight => raw.as_str().and_then(parse_weight),
            Feature::Height => raw.as_str().and_then(parse_height),
            Feature::Field(_) => coerce_number(raw),
        };

        value.ok_or_else(|| QueryError::NotNumeric {
            creature: creature.name().to_string(),
            field: key.to_string(),
            value: raw.to_string(),
        })
    }
}

/// Creature holding the largest or smallest value of `feature`.
///
/// Every creature's value is computed before selecting, so one creature
/// lacking the feature or holding a non-numeric value fails the whole query.
/// On ties the creature that comes first in the dataset wins. Returns `None`
/// only when there are no creatures.
pub fn extremum<'a>(
    dataset: &'a Dataset,
    func: Extremum,
    feature: &str,
) -> Result<Option<&'a Creature>, QueryError> {
    let feature = Feature::parse(feature);

    let values = dataset
        .pokemons()
        .iter()
        .map(|creature| feature.value_of(creature).map(|value| (creature, value)))
        .collect::<Result<Vec<_>, _>>()?;

    let best = values.into_iter().reduce(|best, next| {
        if func.prefers(next.1, best.1) {
            next
        } else {
            best
        }
    });

    Ok(best.map(|(creature, _)| creature))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn sort_by_field(creatures: &mut [&Creature], field: &str) -> Result<(), QueryError> {
    if let Some(missing) = creatures.iter().find(|creature| creature.field(field).is_none()) {
        return Err(QueryError::MissingField {
            creature: missing.name().to_string(),
            field: field.to_string(),
        });
    }

    let mut incomparable = false;
    creatures.sort_by(|a, b| match (a.field(field), b.field(field)) {
        (Some(a), Some(b)) => order::compare(a, b).unwrap_or_else(|| {
            incomparable = true;
            Ordering::Equal
        }),
        _ => Ordering::Equal,
    });

    if incomparable {
        return Err(QueryError::Incomparable {
            field: field.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pokedex() -> Dataset {
        Dataset::from_json_str(include_str!("../../fixtures/pokedex.json")).unwrap()
    }

    fn names(creatures: &[&Creature]) -> Vec<String> {
        creatures.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_list_all_keeps_dataset_order() {
        let dataset = pokedex();
        let all = list(&dataset, &ListQuery::new()).unwrap();

        assert_eq!(all.len(), dataset.pokemons().len());
        assert_eq!(all[0].name(), "Bulbasaur");
        assert_eq!(all[11].name(), "Flareon");
    }

    #[test]
    fn test_list_by_type() {
        let dataset = pokedex();

        let fire = list(&dataset, &ListQuery::new().with_type("fire")).unwrap();
        assert_eq!(
            names(&fire),
            ["Charmander", "Charmeleon", "Charizard", "Eevee", "Flareon"]
        );

        let flying = list(&dataset, &ListQuery::new().with_type("FLYING")).unwrap();
        assert_eq!(
            names(&flying),
            ["Charmander", "Charmeleon", "Charizard", "Pidgey"]
        );

        let dragon = list(&dataset, &ListQuery::new().with_type("dragon")).unwrap();
        assert!(dragon.is_empty());
    }

    #[test]
    fn test_list_matches_has_type() {
        let dataset = pokedex();
        let water = list(&dataset, &ListQuery::new().with_type("Water")).unwrap();

        let expected: Vec<&Creature> = dataset
            .pokemons()
            .iter()
            .filter(|c| has_type(&dataset, "Water", c))
            .collect();
        assert_eq!(water, expected);
        assert_eq!(names(&water), ["Squirtle", "Eevee", "Vaporeon"]);
    }

    #[test]
    fn test_list_sorted_by_name() {
        let dataset = pokedex();
        let sorted = list(&dataset, &ListQuery::new().with_sort("name")).unwrap();

        assert_eq!(
            names(&sorted),
            [
                "Bulbasaur",
                "Charizard",
                "Charmander",
                "Charmeleon",
                "Eevee",
                "Flareon",
                "Ivysaur",
                "Jolteon",
                "Pidgey",
                "Squirtle",
                "Vaporeon",
                "Venusaur"
            ]
        );
    }

    #[test]
    fn test_list_filtered_and_sorted() {
        let dataset = pokedex();
        let query = ListQuery::new().with_type("fire").with_sort("name");
        let result = list(&dataset, &query).unwrap();

        assert_eq!(
            names(&result),
            ["Charizard", "Charmander", "Charmeleon", "Eevee", "Flareon"]
        );
    }

    #[test]
    fn test_empty_parameters_are_ignored() {
        let dataset = pokedex();
        let query = ListQuery::new().with_type("").with_sort("");
        let result = list(&dataset, &query).unwrap();

        assert_eq!(result.len(), dataset.pokemons().len());
        assert_eq!(result[0].name(), "Bulbasaur");
    }

    #[test]
    fn test_sort_is_stable() {
        let dataset = Dataset::from_value(json!({
            "pokemons": [
                { "Name": "Gastly", "Type I": ["Ghost"], "Tier": 2 },
                { "Name": "Abra", "Type I": ["Psychic"], "Tier": 1 },
                { "Name": "Haunter", "Type I": ["Ghost"], "Tier": 2 },
                { "Name": "Kadabra", "Type I": ["Psychic"], "Tier": 1 }
            ],
            "types": [],
            "moves": []
        }))
        .unwrap();

        let sorted = list(&dataset, &ListQuery::new().with_sort("tier")).unwrap();
        assert_eq!(names(&sorted), ["Abra", "Kadabra", "Gastly", "Haunter"]);
    }

    #[test]
    fn test_sort_field_is_capitalized() {
        let dataset = pokedex();

        // "maxcp" becomes "Maxcp", which no record has
        let result = list(&dataset, &ListQuery::new().with_sort("maxcp"));
        assert_eq!(
            result,
            Err(QueryError::MissingField {
                creature: "Bulbasaur".into(),
                field: "Maxcp".into()
            })
        );
    }

    #[test]
    fn test_sort_mixed_kinds() {
        let dataset = Dataset::from_value(json!({
            "pokemons": [
                { "Name": "Abra", "Type I": ["Psychic"], "Rank": 1 },
                { "Name": "Kadabra", "Type I": ["Psychic"], "Rank": "2" }
            ],
            "types": [],
            "moves": []
        }))
        .unwrap();

        let result = list(&dataset, &ListQuery::new().with_sort("rank"));
        assert_eq!(
            result,
            Err(QueryError::Incomparable {
                field: "Rank".into()
            })
        );
    }

    #[test]
    fn test_list_category() {
        let dataset = pokedex();

        let moves = list_category(&dataset, "moves").unwrap();
        assert_eq!(moves.len(), 4);
        assert_eq!(list_category(&dataset, "types").unwrap().len(), 4);
        assert_eq!(list_category(&dataset, "pokemons").unwrap().len(), 12);

        assert!(matches!(
            list_category(&dataset, "unknown"),
            Err(QueryError::UnknownCategory(ref name)) if name == "unknown"
        ));
    }

    #[test]
    fn test_get_by_name() {
        let dataset = pokedex();

        assert!(matches!(
            get_by_name(&dataset, "Charizard"),
            Some(Entry::Creature(c)) if c.name() == "Charizard"
        ));
        assert!(matches!(
            get_by_name(&dataset, "Fire"),
            Some(Entry::Type(t)) if t.name() == "Fire"
        ));
        assert!(matches!(
            get_by_name(&dataset, "Vine Whip"),
            Some(Entry::Move(m)) if m.name() == "Vine Whip"
        ));
        assert!(get_by_name(&dataset, "charizard").is_none());
    }

    #[test]
    fn test_count_moves() {
        let dataset = pokedex();

        assert_eq!(count_moves(&dataset, "Bulbasaur"), Some(5));
        assert_eq!(count_moves(&dataset, "Vaporeon"), Some(4));
        assert_eq!(count_moves(&dataset, "Missingno"), None);
    }

    #[test]
    fn test_extremum_from_str() {
        assert_eq!("max".parse::<Extremum>(), Ok(Extremum::Max));
        assert_eq!("MIN".parse::<Extremum>(), Ok(Extremum::Min));
        assert_eq!(
            "avg".parse::<Extremum>(),
            Err(QueryError::UnknownFunction("avg".into()))
        );
    }

    #[test]
    fn test_feature_parse() {
        assert_eq!(Feature::parse("Weight"), Feature::Weight);
        assert_eq!(Feature::parse("HEIGHT"), Feature::Height);
        assert_eq!(Feature::parse("BaseAttack"), Feature::Field("BaseAttack"));
        assert_eq!(Feature::parse("weight").key(), "Weight");
    }

    #[test]
    fn test_extremum_weight_and_height() {
        let dataset = pokedex();

        let heaviest = extremum(&dataset, Extremum::Max, "weight").unwrap().unwrap();
        assert_eq!(heaviest.name(), "Venusaur");

        let lightest = extremum(&dataset, Extremum::Min, "Weight").unwrap().unwrap();
        assert_eq!(lightest.name(), "Pidgey");

        let tallest = extremum(&dataset, Extremum::Max, "height").unwrap().unwrap();
        assert_eq!(tallest.name(), "Venusaur");
    }

    #[test]
    fn test_extremum_tie_keeps_first() {
        let dataset = pokedex();

        // Pidgey and Eevee are both 0,3 m; Pidgey comes first
        let shortest = extremum(&dataset, Extremum::Min, "height").unwrap().unwrap();
        assert_eq!(shortest.name(), "Pidgey");
    }

    #[test]
    fn test_extremum_numeric_fields() {
        let dataset = pokedex();

        let strongest = extremum(&dataset, Extremum::Max, "BaseAttack").unwrap().unwrap();
        assert_eq!(strongest.name(), "Flareon");

        // Numeric strings are coerced
        let first = extremum(&dataset, Extremum::Min, "Number").unwrap().unwrap();
        assert_eq!(first.name(), "Bulbasaur");
    }

    #[test]
    fn test_extremum_heavier_wins() {
        let dataset = Dataset::from_value(json!({
            "pokemons": [
                { "Name": "A", "Type I": ["Normal"], "Weight": "6,9 kg" },
                { "Name": "B", "Type I": ["Normal"], "Weight": "10,0 kg" }
            ],
            "types": [],
            "moves": []
        }))
        .unwrap();

        let heaviest = extremum(&dataset, Extremum::Max, "weight").unwrap().unwrap();
        assert_eq!(heaviest.name(), "B");
    }

    #[test]
    fn test_extremum_errors() {
        let dataset = pokedex();

        assert_eq!(
            extremum(&dataset, Extremum::Max, "Classification"),
            Err(QueryError::NotNumeric {
                creature: "Bulbasaur".into(),
                field: "Classification".into(),
                value: "\"Seed Pokemon\"".into()
            })
        );

        // Field keys other than weight and height are case-sensitive
        assert_eq!(
            extremum(&dataset, Extremum::Max, "baseattack"),
            Err(QueryError::MissingField {
                creature: "Bulbasaur".into(),
                field: "baseattack".into()
            })
        );
    }

    #[test]
    fn test_extremum_empty_dataset() {
        let dataset = Dataset::default();
        assert_eq!(extremum(&dataset, Extremum::Max, "weight"), Ok(None));
    }
}
