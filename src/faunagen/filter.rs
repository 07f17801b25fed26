//! Narrowing a record collection by one characteristic.

use crate::model::Animal;
use std::collections::BTreeSet;

/// Pseudo-value offered at the filter prompt meaning "records that lack the
/// characteristic entirely". Never matched against stored values.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Filter `animals` by `key`/`value`. Three-way policy:
///
/// - blank `value`: no filter, the collection passes through unchanged;
/// - `value == NOT_SPECIFIED`: keep records that do not carry `key` at all;
/// - otherwise: keep records whose stored value for `key` equals `value`
///   exactly; records lacking the key drop out.
pub fn by_characteristic(animals: Vec<Animal>, key: &str, value: &str) -> Vec<Animal> {
    if value.trim().is_empty() {
        return animals;
    }
    if value == NOT_SPECIFIED {
        return animals
            .into_iter()
            .filter(|a| !a.has_characteristic(key))
            .collect();
    }
    animals
        .into_iter()
        .filter(|a| a.characteristic(key) == Some(value))
        .collect()
}

/// Sorted, deduplicated values stored under `key` across the collection,
/// with [`NOT_SPECIFIED`] included when any record lacks the key. This is
/// the choice list shown at the filter prompt.
pub fn known_values(animals: &[Animal], key: &str) -> Vec<String> {
    let mut values: BTreeSet<String> = BTreeSet::new();
    for animal in animals {
        match animal.characteristic(key) {
            Some(value) => {
                values.insert(value.to_string());
            }
            None => {
                values.insert(NOT_SPECIFIED.to_string());
            }
        }
    }
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herd() -> Vec<Animal> {
        vec![
            Animal::new("Fox", vec!["Forest".into()]).with_characteristic("diet", "Omnivore"),
            Animal::new("Owl", vec!["Forest".into()]).with_characteristic("diet", "Carnivore"),
            Animal::new("Slug", vec!["Garden".into()]),
        ]
    }

    #[test]
    fn blank_value_is_identity() {
        let animals = herd();
        let kept = by_characteristic(animals.clone(), "diet", "");
        assert_eq!(kept.len(), animals.len());
        let kept = by_characteristic(animals, "diet", "   ");
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn exact_value_keeps_matching_records_only() {
        let kept = by_characteristic(herd(), "diet", "Omnivore");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Fox");
    }

    #[test]
    fn value_match_is_case_sensitive() {
        assert!(by_characteristic(herd(), "diet", "omnivore").is_empty());
    }

    #[test]
    fn sentinel_selects_records_lacking_the_key() {
        let kept = by_characteristic(herd(), "diet", NOT_SPECIFIED);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Slug");
    }

    #[test]
    fn sentinel_and_key_holders_partition_the_collection() {
        let animals = herd();
        let lacking = by_characteristic(animals.clone(), "diet", NOT_SPECIFIED);
        let holding: Vec<_> = animals
            .iter()
            .filter(|a| a.has_characteristic("diet"))
            .collect();
        assert_eq!(lacking.len() + holding.len(), animals.len());
    }

    #[test]
    fn unknown_key_with_sentinel_keeps_everything() {
        let kept = by_characteristic(herd(), "wingspan", NOT_SPECIFIED);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn known_values_are_sorted_with_sentinel_for_gaps() {
        let values = known_values(&herd(), "diet");
        assert_eq!(values, vec!["Carnivore", NOT_SPECIFIED, "Omnivore"]);
    }

    #[test]
    fn known_values_without_gaps_omit_the_sentinel() {
        let animals: Vec<_> = herd()
            .into_iter()
            .filter(|a| a.has_characteristic("diet"))
            .collect();
        let values = known_values(&animals, "diet");
        assert!(!values.iter().any(|v| v == NOT_SPECIFIED));
    }
}
