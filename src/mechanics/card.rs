//! Assembled cards.
//!
//! A `Card` is the finished product of the generation pipeline: combat
//! stats, a composed visual style, and the rendered prompt strings for the
//! downstream image renderer. Cards are owned by a `Collection` and get
//! their 1-based `index` at append time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::content::Style;

use super::ability::Ability;
use super::element::Element;
use super::rarity::Rarity;

const STAR: &str = "\u{2605} ";

/// A generated trading card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// 1-based position in the owning collection, assigned at append time.
    pub index: usize,

    /// Display name.
    pub name: String,

    /// The card's element; all series members share it.
    pub element: Element,

    /// Strength tier.
    pub rarity: Rarity,

    /// Hit points.
    pub hp: u32,

    /// One or two abilities, primary first.
    pub abilities: SmallVec<[Ability; 2]>,

    /// Flavor description.
    pub description: String,

    /// Whether this card belongs to a multi-card evolutionary series.
    pub part_of_series: bool,

    /// Composed visual/narrative identity.
    pub style: Style,

    /// Rendered prompt for the downstream image renderer.
    pub image_prompt: String,

    /// Prose form of the visual identity, used by the naming collaborator.
    pub visual_description: String,
}

impl Card {
    /// The card name lowercased with spaces replaced by underscores.
    #[must_use]
    pub fn snake_case_name(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    /// Artwork file name for the export layout, e.g. `001_emberfox.png`.
    #[must_use]
    pub fn image_file(&self) -> String {
        format!("{:03}_{}.png", self.index, self.snake_case_name())
    }

    /// Export form of this card: every stable field the persistence
    /// collaborator consumes.
    #[must_use]
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::json!({
            "index": self.index,
            "name": self.name,
            "description": self.description,
            "element": self.element.name,
            "rarity": self.rarity.name,
            "rarity_index": self.rarity.index,
            "hp": self.hp,
            "abilities": self.abilities.iter().map(|ability| {
                serde_json::json!({
                    "name": ability.name,
                    "element": ability.element.name,
                    "cost": ability.cost,
                    "is_mixed_element": ability.is_mixed_element,
                    "power": ability.power(),
                })
            }).collect::<Vec<_>>(),
            "image_prompt": self.image_prompt,
            "image_file": self.image_file(),
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rarity_stars = STAR.repeat(self.rarity.index + 1);
        writeln!(f, "{} ({})", self.name, self.element.colored_name())?;
        writeln!(f, "HP: {}", self.hp)?;
        writeln!(f, "Rarity: {}({})", rarity_stars, self.rarity.name)?;
        writeln!(f, "Abilities:")?;
        for ability in &self.abilities {
            writeln!(f, "  {ability}")?;
        }
        writeln!(f, "Description:")?;
        writeln!(f, "{}\n", self.description)?;
        writeln!(f, "Image Prompt:")?;
        writeln!(f, "{}\n", self.image_prompt)
    }
}
