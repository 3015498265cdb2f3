//! Theme configuration.
//!
//! A theme bundles everything that was global state in older card
//! generators - element set, rarity ladder, creature catalog, base style -
//! into one explicitly constructed object, so multiple themes can run
//! side by side (and tests can use tiny ones).

use crate::mechanics::{Element, Rarity};

use super::catalog::Catalog;
use super::style::Style;

/// Complete theme configuration for a collection run.
///
/// ## Example
///
/// ```
/// use monster_forge::content::{Catalog, Style, Theme};
/// use monster_forge::mechanics::{Element, Rarity};
///
/// let theme = Theme::new("mini")
///     .with_style(Style::theme_base("monster", "--niji"))
///     .with_elements([Element::new("Neutral").neutral(), Element::new("Fire")])
///     .with_rarities([Rarity::new("common", 0), Rarity::new("rare", 1)])
///     .with_catalog(Catalog::new());
///
/// assert_eq!(theme.default_element().name, "Neutral");
/// ```
#[derive(Clone, Debug)]
pub struct Theme {
    /// Theme name (used in export metadata).
    pub name: String,

    /// Base style: subject type, decorations, theme-wide adjectives.
    pub style: Style,

    /// Fixed element set; the first entry is the neutral/default element.
    pub elements: Vec<Element>,

    /// Rarity ladder, weakest first.
    pub rarities: Vec<Rarity>,

    /// Static creature/environment/ambience tables.
    pub catalog: Catalog,
}

impl Theme {
    /// Create an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            elements: Vec::new(),
            rarities: Vec::new(),
            catalog: Catalog::new(),
        }
    }

    /// Set the base style (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the element list (builder pattern).
    #[must_use]
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.elements = elements.into_iter().collect();
        self
    }

    /// Set the rarity ladder (builder pattern).
    #[must_use]
    pub fn with_rarities(mut self, rarities: impl IntoIterator<Item = Rarity>) -> Self {
        self.rarities = rarities.into_iter().collect();
        self
    }

    /// Set the catalog (builder pattern).
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The theme's default element (the first in the list).
    ///
    /// Panics if the theme has no elements.
    #[must_use]
    pub fn default_element(&self) -> &Element {
        self.elements.first().expect("theme has no elements")
    }

    /// Look up an element by name, case-insensitively.
    #[must_use]
    pub fn element_by_name(&self, name: &str) -> Option<&Element> {
        let wanted = name.to_lowercase();
        self.elements.iter().find(|e| e.name.to_lowercase() == wanted)
    }

    /// Look up a rarity by name, case-insensitively.
    #[must_use]
    pub fn rarity_by_name(&self, name: &str) -> Option<&Rarity> {
        let wanted = name.to_lowercase();
        self.rarities.iter().find(|r| r.name.to_lowercase() == wanted)
    }

    /// The highest rarity index, or 0 for an empty ladder.
    #[must_use]
    pub fn max_rarity_index(&self) -> usize {
        self.rarities.len().saturating_sub(1)
    }
}
