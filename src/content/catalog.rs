//! Creature catalog - the static tables the style composer draws from.
//!
//! The catalog maps each element to its thematically valid creature
//! archetypes, environments, ambience phrases and detail adjectives.
//! It is built once when the theme is constructed and never mutated by
//! generation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::mechanics::Element;

/// An optional physical trait an archetype can carry.
///
/// Renders as `"<relation> [<quantifier>] [<adjective>] <noun>"`,
/// e.g. `"holding a golden sword"` or `"with claws"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detail {
    /// How the trait attaches to the subject: "with", "holding", "wearing".
    pub relation: String,

    /// The trait itself, e.g. "claws", "sword".
    pub noun: String,

    /// Article for the noun, e.g. "a", "an".
    pub quantifier: Option<String>,
}

impl Detail {
    /// A `"with ..."` trait.
    pub fn with(noun: impl Into<String>) -> Self {
        Self {
            relation: "with".to_string(),
            noun: noun.into(),
            quantifier: None,
        }
    }

    /// A `"holding ..."` trait.
    pub fn holding(noun: impl Into<String>) -> Self {
        Self {
            relation: "holding".to_string(),
            noun: noun.into(),
            quantifier: None,
        }
    }

    /// A `"wearing ..."` trait.
    pub fn wearing(noun: impl Into<String>) -> Self {
        Self {
            relation: "wearing".to_string(),
            noun: noun.into(),
            quantifier: None,
        }
    }

    /// Set the article (builder pattern).
    #[must_use]
    pub fn quantified(mut self, quantifier: impl Into<String>) -> Self {
        self.quantifier = Some(quantifier.into());
        self
    }

    /// Render the trait phrase, folding in an optional adjective.
    #[must_use]
    pub fn text(&self, adjective: Option<&str>) -> String {
        let mut parts = vec![self.relation.as_str()];
        if let Some(quantifier) = &self.quantifier {
            parts.push(quantifier);
        }
        if let Some(adjective) = adjective {
            parts.push(adjective);
        }
        parts.push(&self.noun);
        parts.join(" ")
    }
}

/// A creature archetype: a subject name plus its valid physical traits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Subject name, e.g. "wolf".
    pub name: String,

    /// Traits this archetype can plausibly carry.
    pub details: Vec<Detail>,
}

impl Archetype {
    /// Create an archetype with no traits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: Vec::new(),
        }
    }

    /// Add traits (builder pattern).
    #[must_use]
    pub fn with_details(mut self, details: impl IntoIterator<Item = Detail>) -> Self {
        self.details.extend(details);
        self
    }
}

/// Static per-element content tables.
///
/// Lists keep their insertion order; every random draw is made over a
/// slice, never over map iteration, so catalog lookups are deterministic.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    archetypes: FxHashMap<Element, Vec<Archetype>>,
    environments: FxHashMap<Element, Vec<String>>,
    ambience: FxHashMap<Element, Vec<String>>,
    detail_adjectives: FxHashMap<Element, Vec<String>>,
    global_detail_adjectives: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archetypes valid for an element (builder pattern).
    ///
    /// Duplicate names within the list are dropped, keeping the first.
    #[must_use]
    pub fn with_archetypes(
        mut self,
        element: Element,
        archetypes: impl IntoIterator<Item = Archetype>,
    ) -> Self {
        let mut seen = rustc_hash::FxHashSet::default();
        let unique: Vec<Archetype> = archetypes
            .into_iter()
            .filter(|a| seen.insert(a.name.clone()))
            .collect();
        self.archetypes.insert(element, unique);
        self
    }

    /// Set the environments for an element (builder pattern).
    #[must_use]
    pub fn with_environments<S: Into<String>>(
        mut self,
        element: Element,
        environments: impl IntoIterator<Item = S>,
    ) -> Self {
        self.environments
            .insert(element, environments.into_iter().map(Into::into).collect());
        self
    }

    /// Set the ambience list for an element (builder pattern).
    ///
    /// The last entry is reserved for the final card of a fully evolved
    /// series and is never drawn for other cards.
    #[must_use]
    pub fn with_ambience<S: Into<String>>(
        mut self,
        element: Element,
        ambience: impl IntoIterator<Item = S>,
    ) -> Self {
        self.ambience
            .insert(element, ambience.into_iter().map(Into::into).collect());
        self
    }

    /// Set the element-specific detail adjectives (builder pattern).
    #[must_use]
    pub fn with_detail_adjectives<S: Into<String>>(
        mut self,
        element: Element,
        adjectives: impl IntoIterator<Item = S>,
    ) -> Self {
        self.detail_adjectives
            .insert(element, adjectives.into_iter().map(Into::into).collect());
        self
    }

    /// Set the adjectives shared by every element (builder pattern).
    #[must_use]
    pub fn with_global_detail_adjectives<S: Into<String>>(
        mut self,
        adjectives: impl IntoIterator<Item = S>,
    ) -> Self {
        self.global_detail_adjectives = adjectives.into_iter().map(Into::into).collect();
        self
    }

    /// Archetypes valid for an element.
    #[must_use]
    pub fn archetypes(&self, element: &Element) -> &[Archetype] {
        self.archetypes.get(element).map_or(&[], Vec::as_slice)
    }

    /// Environments for an element.
    #[must_use]
    pub fn environments(&self, element: &Element) -> &[String] {
        self.environments.get(element).map_or(&[], Vec::as_slice)
    }

    /// Full ambience list for an element, reserved entry last.
    #[must_use]
    pub fn ambience(&self, element: &Element) -> &[String] {
        self.ambience.get(element).map_or(&[], Vec::as_slice)
    }

    /// Pooled detail adjectives: global first, then element-specific.
    #[must_use]
    pub fn detail_adjective_pool(&self, element: &Element) -> Vec<String> {
        let mut pool = self.global_detail_adjectives.clone();
        if let Some(extra) = self.detail_adjectives.get(element) {
            pool.extend(extra.iter().cloned());
        }
        pool
    }

    /// Resolve a subject override against the catalog.
    ///
    /// Tries a case-insensitive exact name match, then a unique-prefix
    /// match (lexicographically first on ties), and finally synthesizes a
    /// one-off archetype with a generic armor trait so overrides never
    /// fail.
    #[must_use]
    pub fn resolve_subject(&self, subject_override: &str) -> Archetype {
        let wanted = subject_override.to_lowercase();

        let mut names: Vec<&Archetype> = self.archetypes.values().flatten().collect();
        names.sort_by(|a, b| a.name.cmp(&b.name));
        names.dedup_by(|a, b| a.name == b.name);

        if let Some(exact) = names.iter().find(|a| a.name.to_lowercase() == wanted) {
            return (*exact).clone();
        }

        if let Some(prefix) = names.iter().find(|a| a.name.to_lowercase().starts_with(&wanted)) {
            return (*prefix).clone();
        }

        log::warn!("no catalog match for subject override {subject_override:?}, synthesizing");
        Archetype::new(subject_override).with_details([Detail::wearing("armor")])
    }
}
