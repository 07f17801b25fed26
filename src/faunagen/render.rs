//! Turns animal records into the HTML fragment that gets injected into the
//! page template. One record becomes one "card" list item; the collection
//! fragment is the concatenation of cards in input order.

use crate::error::Result;
use crate::html::wrap_tag;
use crate::model::Animal;
use std::collections::BTreeSet;

const ROW_CLASS: &str = "animal_characteristic";

/// Sorted, deduplicated union of every characteristic key present in any
/// record. Drives both the filter prompt and the per-card row order, so
/// every card lists its fields in the same order.
pub fn all_characteristic_keys(animals: &[Animal]) -> Vec<String> {
    let keys: BTreeSet<&str> = animals
        .iter()
        .flat_map(|a| a.characteristics.keys().map(|k| k.as_str()))
        .collect();
    keys.into_iter().map(str::to_string).collect()
}

/// Display form of a characteristic key: "skin_type" -> "Skin type".
pub fn display_label(key: &str) -> String {
    let mut chars = key.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    };
    capitalized.replace('_', " ")
}

/// Serialize one record into a card.
///
/// The Location row is always emitted; characteristic rows follow in the
/// order of `keys`, silently skipping keys the record lacks. A record
/// violating the required-field invariant fails with a shape error.
pub fn serialize_animal(animal: &Animal, keys: &[String]) -> Result<String> {
    animal.validate()?;
    let location = animal.primary_location().unwrap_or("");

    let title = wrap_tag(&animal.name, "div", Some("card__title"), None);

    let mut rows = String::new();
    let location_line = format!("{}: {}", wrap_tag("Location", "strong", None, None), location);
    rows.push_str(&wrap_tag(&location_line, "li", Some(ROW_CLASS), None));
    rows.push('\n');

    for key in keys {
        if let Some(value) = animal.characteristic(key) {
            let line = format!(
                "{}: {}",
                wrap_tag(&display_label(key), "strong", None, None),
                value
            );
            rows.push_str(&wrap_tag(&line, "li", Some(ROW_CLASS), None));
            rows.push('\n');
        }
    }

    let info = wrap_tag(&rows, "ul", Some("card__info"), None);
    let text = wrap_tag(&format!("{info}\n"), "p", Some("card__text"), None);
    let card = wrap_tag(
        &format!("{title}\n{text}\n"),
        "li",
        Some("cards__item"),
        None,
    );
    Ok(format!("{card}\n"))
}

/// Concatenate cards for every record, in input order. An empty collection
/// renders to an empty fragment.
pub fn render_all(animals: &[Animal], keys: &[String]) -> Result<String> {
    let mut fragment = String::new();
    for animal in animals {
        fragment.push_str(&serialize_animal(animal, keys)?);
    }
    Ok(fragment)
}

/// Fragment shown when a name query matched nothing; replaces the card list.
pub fn no_match_fragment(query: &str) -> String {
    wrap_tag(
        &format!("The animal \"{query}\" doesn't exist."),
        "h2",
        None,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaunagenError;

    fn fox() -> Animal {
        Animal::new("Fox", vec!["Forest".into()]).with_characteristic("diet", "Omnivore")
    }

    fn owl() -> Animal {
        Animal::new("Owl", vec!["Forest".into()])
    }

    #[test]
    fn key_union_is_sorted_and_deduplicated() {
        let animals = vec![
            fox().with_characteristic("skin_type", "Fur"),
            owl().with_characteristic("diet", "Carnivore"),
        ];
        assert_eq!(all_characteristic_keys(&animals), vec!["diet", "skin_type"]);
    }

    #[test]
    fn key_union_is_order_independent() {
        let mut animals = vec![fox().with_characteristic("skin_type", "Fur"), owl()];
        let forward = all_characteristic_keys(&animals);
        animals.reverse();
        assert_eq!(all_characteristic_keys(&animals), forward);
    }

    #[test]
    fn key_union_of_empty_collection_is_empty() {
        assert!(all_characteristic_keys(&[]).is_empty());
    }

    #[test]
    fn labels_capitalize_and_replace_underscores() {
        assert_eq!(display_label("skin_type"), "Skin type");
        assert_eq!(display_label("diet"), "Diet");
        assert_eq!(display_label("SKIN_TYPE"), "Skin type");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn card_without_characteristics_has_only_the_location_row() {
        let keys = vec!["diet".to_string()];
        let card = serialize_animal(&owl(), &keys).unwrap();
        assert_eq!(card.matches("animal_characteristic").count(), 1);
        assert!(card.contains("<strong>Location</strong>: Forest"));
        assert!(!card.contains("Diet"));
    }

    #[test]
    fn card_lists_present_characteristics_in_key_order() {
        let animal = fox().with_characteristic("skin_type", "Fur");
        let keys = vec!["diet".to_string(), "skin_type".to_string()];
        let card = serialize_animal(&animal, &keys).unwrap();

        assert!(card.contains("<div class=\"card__title\">Fox</div>"));
        assert!(card.contains("<strong>Diet</strong>: Omnivore"));
        assert!(card.contains("<strong>Skin type</strong>: Fur"));
        let diet_at = card.find("Diet").unwrap();
        let skin_at = card.find("Skin type").unwrap();
        assert!(diet_at < skin_at);
    }

    #[test]
    fn card_nests_rows_in_list_text_and_item_containers() {
        let card = serialize_animal(&fox(), &["diet".to_string()]).unwrap();
        assert!(card.starts_with("<li class=\"cards__item\">"));
        assert!(card.contains("<p class=\"card__text\">"));
        assert!(card.contains("<ul class=\"card__info\">"));
    }

    #[test]
    fn malformed_record_is_a_shape_error() {
        let nameless = Animal::new("", vec!["Forest".into()]);
        let err = serialize_animal(&nameless, &[]).unwrap_err();
        assert!(matches!(err, FaunagenError::Shape(_)));
    }

    #[test]
    fn render_all_concatenates_in_input_order() {
        let animals = vec![fox(), owl()];
        let keys = all_characteristic_keys(&animals);
        let fragment = render_all(&animals, &keys).unwrap();
        assert!(fragment.find("Fox").unwrap() < fragment.find("Owl").unwrap());
        assert_eq!(fragment.matches("cards__item").count(), 2);
    }

    #[test]
    fn render_all_of_empty_collection_is_empty() {
        assert_eq!(render_all(&[], &[]).unwrap(), "");
    }

    #[test]
    fn no_match_fragment_names_the_query() {
        assert_eq!(
            no_match_fragment("Dodo"),
            "<h2>The animal \"Dodo\" doesn't exist.</h2>"
        );
    }
}
