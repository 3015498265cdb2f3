//! Elements - the type affinities cards and abilities belong to.
//!
//! An element is an identity value: two elements are the same element when
//! they have the same name, regardless of display color. A theme defines a
//! fixed element list at startup (by convention the first entry is the
//! neutral/default element) and the generator never creates new ones.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

const ANSI_RESET: &str = "\x1b[0m";

/// A card/ability type affinity (Fire, Water, Neutral, ...).
///
/// ## Example
///
/// ```
/// use monster_forge::mechanics::Element;
///
/// let fire = Element::new("Fire").with_color("\x1b[31m");
/// assert!(!fire.is_neutral);
/// assert_eq!(fire.colorize("hot"), "\x1b[31mhot\x1b[0m");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Element {
    /// Element name; the element's identity.
    pub name: String,

    /// ANSI color code used when rendering card sheets to a terminal.
    pub color: Option<String>,

    /// Neutral elements pay no elemental cost and get no power bonus.
    pub is_neutral: bool,
}

impl Element {
    /// Create a new non-neutral, uncolored element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            is_neutral: false,
        }
    }

    /// Set the display color (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark this element as neutral.
    #[must_use]
    pub fn neutral(mut self) -> Self {
        self.is_neutral = true;
        self
    }

    /// Wrap text in this element's display color, if it has one.
    #[must_use]
    pub fn colorize(&self, text: &str) -> String {
        match &self.color {
            Some(color) => format!("{color}{text}{ANSI_RESET}"),
            None => text.to_string(),
        }
    }

    /// The element name in its display color.
    #[must_use]
    pub fn colored_name(&self) -> String {
        self.colorize(&self.name)
    }
}

// Identity is the name alone; color is presentation.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
