use crate::error::{FaunagenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One animal record as served by the lookup API (or a local JSON dump).
///
/// `characteristics` is an open map: which keys are present varies per
/// record, and absence of a key is normal. `name` and the first entry of
/// `locations` are required for rendering; see [`Animal::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,

    #[serde(default)]
    pub locations: Vec<String>,

    #[serde(default)]
    pub characteristics: BTreeMap<String, String>,
}

impl Animal {
    pub fn new(name: impl Into<String>, locations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            locations,
            characteristics: BTreeMap::new(),
        }
    }

    /// Check the required-field invariant: non-empty name, at least one
    /// location. Rendering must not proceed past a failing record.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FaunagenError::Shape("record has no name".to_string()));
        }
        if self.primary_location().is_none() {
            return Err(FaunagenError::Shape(format!(
                "record \"{}\" has no locations",
                self.name
            )));
        }
        Ok(())
    }

    /// First location, the one shown on the card.
    pub fn primary_location(&self) -> Option<&str> {
        self.locations
            .first()
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn characteristic(&self, key: &str) -> Option<&str> {
        self.characteristics.get(key).map(|s| s.as_str())
    }

    pub fn has_characteristic(&self, key: &str) -> bool {
        self.characteristics.contains_key(key)
    }

    #[cfg(test)]
    pub fn with_characteristic(mut self, key: &str, value: &str) -> Self {
        self.characteristics
            .insert(key.to_string(), value.to_string());
        self
    }
}
