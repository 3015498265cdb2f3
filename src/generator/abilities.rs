//! Ability generation.
//!
//! Turns the cost split into concrete abilities: the primary ability always
//! carries the card's element, later ones may fall back to the theme's
//! default element as neutral filler, and expensive non-neutral abilities
//! may split their cost across elemental and neutral halves.

use smallvec::SmallVec;

use crate::content::Theme;
use crate::core::GenRng;
use crate::mechanics::{Ability, Element};
use crate::naming::FALLBACK_ABILITY_NAME;

/// Chance a non-primary ability uses the theme default element.
pub const NEUTRAL_ELEMENT_CHANCE: f64 = 0.5;

/// Chance an eligible ability becomes mixed-element.
pub const MIXED_ELEMENT_CHANCE: f64 = 0.5;

/// Generate one ability per cost, primary first.
///
/// Names are left at the fallback; the collection resolves them against
/// the name table afterwards.
pub fn generate_abilities(
    theme: &Theme,
    element: &Element,
    costs: &[u32],
    rng: &mut GenRng,
) -> SmallVec<[Ability; 2]> {
    let mut abilities = SmallVec::new();
    for (i, &cost) in costs.iter().enumerate() {
        let is_primary = i == 0;
        let ability_element = if !is_primary && rng.chance(NEUTRAL_ELEMENT_CHANCE) {
            theme.default_element().clone()
        } else {
            element.clone()
        };
        abilities.push(roll_ability(ability_element, cost, rng));
    }
    abilities
}

/// Roll a single ability for an element and cost.
///
/// The mixed-element coin is only flipped when it can matter (non-neutral
/// element, cost above 1); skipping the draw otherwise keeps the stream
/// position identical across equivalent runs.
pub fn roll_ability(element: Element, cost: u32, rng: &mut GenRng) -> Ability {
    let is_mixed = !element.is_neutral && cost > 1 && rng.chance(MIXED_ELEMENT_CHANCE);
    Ability::new(FALLBACK_ABILITY_NAME, element, cost, is_mixed)
}
