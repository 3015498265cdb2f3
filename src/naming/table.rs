//! Ability name table.
//!
//! A static mapping from ability identity keys (see
//! [`Ability::identity_key`](crate::mechanics::Ability::identity_key)) to
//! candidate display names, typically loaded from a JSON file produced
//! offline by a text-generation run.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Lookup table of ability display names keyed by identity key.
///
/// ## File format
///
/// ```json
/// { "fire_2_pure_standard": ["Ember", "Flame Burst"] }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTable {
    entries: FxHashMap<String, Vec<String>>,
}

impl NameTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON file format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the table back to its JSON file format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Add candidate names for a key.
    pub fn insert(&mut self, key: impl Into<String>, names: impl IntoIterator<Item = String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .extend(names);
    }

    /// Candidate names for a key, if any are known.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice).filter(|names| !names.is_empty())
    }

    /// Number of keys with entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
