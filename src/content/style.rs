//! Card styles - the layered visual/narrative identity of a card.
//!
//! A style is composed per card by the generator; within a series the
//! subject, detail and environment are copied from the first card so the
//! whole series reads as one evolving creature.

use serde::{Deserialize, Serialize};

/// Composed visual/narrative description of a card, independent of stats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// The main character of the card (creature archetype name).
    pub subject: Option<String>,

    /// Theme noun for the subject, e.g. "monster".
    pub subject_type: String,

    /// Ordered adjectives rendered before the subject.
    pub subject_adjectives: Vec<String>,

    /// Secondary physical trait phrase, e.g. "holding a golden sword".
    pub detail: Option<String>,

    /// The adjective that was folded into `detail`.
    pub detail_adjective: Option<String>,

    /// Where the creature lives, e.g. "volcano".
    pub environment: Option<String>,

    /// Lighting/background mood phrase.
    pub ambience: Option<String>,

    /// Theme-level decoration prepended to rendered prompts.
    pub style_prefix: String,

    /// Theme-level decoration appended to rendered prompts.
    pub style_suffix: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            subject: None,
            subject_type: "monster".to_string(),
            subject_adjectives: Vec::new(),
            detail: None,
            detail_adjective: None,
            environment: None,
            ambience: None,
            style_prefix: String::new(),
            style_suffix: String::new(),
        }
    }
}

impl Style {
    /// A theme base style: just the subject type and decorations.
    pub fn theme_base(subject_type: impl Into<String>, style_suffix: impl Into<String>) -> Self {
        Self {
            subject_type: subject_type.into(),
            style_suffix: style_suffix.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let style = Style::default();
        assert_eq!(style.subject_type, "monster");
        assert!(style.subject.is_none());
        assert!(style.subject_adjectives.is_empty());
    }

    #[test]
    fn test_theme_base() {
        let style = Style::theme_base("beast", "--niji");
        assert_eq!(style.subject_type, "beast");
        assert_eq!(style.style_suffix, "--niji");
        assert!(style.detail.is_none());
    }
}
