//! External naming collaborators.
//!
//! Card and ability naming is delegated to collaborators behind traits so
//! the core never talks to a network itself. Both collaborators are treated
//! as unreliable: any failure falls back to placeholder text and generation
//! still produces a structurally valid card.

use thiserror::Error;

use crate::mechanics::{Card, Element};

/// Placeholder used when no ability name can be resolved.
pub const FALLBACK_ABILITY_NAME: &str = "New Ability";

/// Placeholder used when no card name can be resolved.
pub const FALLBACK_CARD_NAME: &str = "Untitled Card";

/// Placeholder used when no description can be resolved.
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Failure of an external naming collaborator.
#[derive(Debug, Error)]
pub enum NamingError {
    /// The collaborator could not be reached or refused the request.
    #[error("naming service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered but produced nothing usable.
    #[error("naming service returned no usable candidates")]
    NoCandidates,
}

/// Generates ability names for identity keys missing from the name table.
///
/// Implementations typically wrap a text-completion service. Results must
/// contain at least one plausible short phrase; the core sanitizes them
/// before use and does not cache them back into the table.
pub trait NameGenerator {
    /// Generate `count` candidate names for an ability with these stats.
    fn generate_names(
        &mut self,
        element: &Element,
        cost: u32,
        is_mixed: bool,
        count: usize,
    ) -> Result<Vec<String>, NamingError>;
}

/// Names and describes finished cards.
///
/// Candidates are de-duplicated against the collection's seen names by the
/// core; the shortest surviving candidate wins.
pub trait CardNamer {
    /// Produce candidate display names for a card.
    fn name_candidates(&mut self, card: &Card) -> Result<Vec<String>, NamingError>;

    /// Produce a flavor description for a card.
    fn describe(&mut self, card: &Card) -> Result<String, NamingError>;
}

/// The always-available fallback namer: placeholder name and description.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderNamer;

impl CardNamer for PlaceholderNamer {
    fn name_candidates(&mut self, _card: &Card) -> Result<Vec<String>, NamingError> {
        Ok(vec![FALLBACK_CARD_NAME.to_string()])
    }

    fn describe(&mut self, _card: &Card) -> Result<String, NamingError> {
        Ok(FALLBACK_DESCRIPTION.to_string())
    }
}
