//! Type membership through the evolution chain

use std::collections::HashSet;

use pokedex_data::{Creature, Dataset};

/// Upper-case the first character and lower-case the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Check if `creature` has `target_type`, directly or through an evolution.
///
/// A creature has the type when its `Type I` or `Type II` list is exactly
/// `[target_type]`, or when any creature it evolves into has it. A creature
/// listing two types under `Type I` therefore never matches on that list.
/// Evolutions that do not resolve to a creature contribute nothing, and a
/// creature seen twice on one resolution is not followed again.
pub fn has_type(dataset: &Dataset, target_type: &str, creature: &Creature) -> bool {
    let mut visited = HashSet::new();
    resolve(dataset, target_type, creature, &mut visited)
}

fn resolve<'a>(
    dataset: &'a Dataset,
    target_type: &str,
    creature: &'a Creature,
    visited: &mut HashSet<&'a str>,
) -> bool {
    if !visited.insert(creature.name()) {
        return false;
    }

    if is_only(creature.primary_types(), target_type)
        || creature
            .secondary_types()
            .is_some_and(|types| is_only(types, target_type))
    {
        return true;
    }

    creature
        .next_evolutions()
        .iter()
        .filter_map(|evolution| dataset.find_creature_by_name(&evolution.name))
        .any(|next| resolve(dataset, target_type, next, visited))
}

fn is_only(types: &[String], target_type: &str) -> bool {
    matches!(types, [only] if only == target_type)
}
