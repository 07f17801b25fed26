//! The pipeline core: records in, finished fragment out. This is the piece
//! the binary wires sources, prompts and file I/O around.

use crate::error::Result;
use crate::filter;
use crate::model::Animal;
use crate::render;

/// Build the fragment for a fetched record collection.
///
/// Zero records with a name query means the lookup found nothing, which is
/// not an error: the fragment becomes a "no such animal" notice instead of
/// a card list. Zero records without a query (an empty local file) renders
/// an empty fragment.
///
/// The characteristic-key union is computed before filtering, so a filtered
/// page still lays out its cards with the full data set's field order.
pub fn build_fragment(
    animals: Vec<Animal>,
    query: Option<&str>,
    filter_key: &str,
    filter_value: &str,
) -> Result<String> {
    if animals.is_empty() {
        return Ok(match query {
            Some(q) => render::no_match_fragment(q),
            None => String::new(),
        });
    }
    let keys = render::all_characteristic_keys(&animals);
    let animals = filter::by_characteristic(animals, filter_key, filter_value);
    render::render_all(&animals, &keys)
}
