//! Ability model.
//!
//! An ability is identified by its `(element, cost, is_mixed_element)`
//! triple; everything else (power, elemental cost, the key used to look up
//! a display name) is derived from those fields. Mixed-element abilities
//! pay only half their cost in their own element, the rest in neutral.

use serde::{Deserialize, Serialize};

use super::element::Element;

/// Unicode pip used when rendering ability costs.
pub const COST_PIP: &str = "\u{25cf}";

/// A single card ability.
///
/// ## Example
///
/// ```
/// use monster_forge::mechanics::{Ability, Element};
///
/// let fire = Element::new("Fire");
/// let ability = Ability::new("Ember", fire, 1, false);
/// assert_eq!(ability.power(), 20);
/// assert_eq!(ability.elemental_cost(), 1);
/// assert_eq!(ability.identity_key(), "fire_1_pure_standard");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Display name, resolved from the name table after construction.
    pub name: String,

    /// The element this ability belongs to.
    pub element: Element,

    /// Total cost in points, between 1 and 4.
    pub cost: u32,

    /// Whether part of the cost is paid in neutral instead of the element.
    pub is_mixed_element: bool,
}

impl Ability {
    /// Create a new ability.
    ///
    /// Panics if `cost` is outside `[1, 4]`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        element: Element,
        cost: u32,
        is_mixed_element: bool,
    ) -> Self {
        assert!((1..=4).contains(&cost), "ability cost {cost} outside [1, 4]");
        Self {
            name: name.into(),
            element,
            cost,
            is_mixed_element,
        }
    }

    /// Combat power: 10 per cost point plus an elemental bonus.
    ///
    /// Neutral abilities get no bonus; mixed and cost-1 abilities get +10;
    /// fully elemental abilities above cost 1 get +20.
    #[must_use]
    pub fn power(&self) -> u32 {
        let base_power = self.cost * 10;
        let elemental_bonus = if self.element.is_neutral {
            0
        } else if self.is_mixed_element || self.cost == 1 {
            10
        } else {
            20
        };
        base_power + elemental_bonus
    }

    /// How much of the cost must be paid in the ability's own element.
    ///
    /// Neutral pays nothing, mixed pays half rounded up, pure pays all.
    #[must_use]
    pub fn elemental_cost(&self) -> u32 {
        if self.element.is_neutral {
            0
        } else if self.is_mixed_element {
            self.cost.div_ceil(2)
        } else {
            self.cost
        }
    }

    /// Stable lowercase key identifying abilities with the same stats.
    ///
    /// Used to look up display names from the name table; the format is a
    /// compatibility surface with existing table files.
    #[must_use]
    pub fn identity_key(&self) -> String {
        let mixed_modifier = if self.is_mixed_element { "mixed" } else { "pure" };
        format!("{}_{}_{}_standard", self.element.name, self.cost, mixed_modifier).to_lowercase()
    }

    /// The element name paid for each cost point, elemental first.
    ///
    /// `neutral_name` is the theme's neutral element name, used for the
    /// non-elemental remainder of mixed costs.
    #[must_use]
    pub fn cost_elements(&self, neutral_name: &str) -> Vec<String> {
        let elemental = self.elemental_cost() as usize;
        let total = self.cost as usize;
        let mut out = vec![self.element.name.clone(); elemental];
        out.extend(std::iter::repeat(neutral_name.to_string()).take(total - elemental));
        out
    }

    /// Render the cost as colored pips, elemental pips first.
    ///
    /// `neutral` supplies the color for the neutral portion of the cost.
    #[must_use]
    pub fn cost_pips(&self, neutral: &Element) -> String {
        let elemental = self.elemental_cost();
        let mut out = String::new();
        for i in 0..self.cost {
            if i < elemental {
                out.push_str(&self.element.colorize(COST_PIP));
            } else {
                out.push_str(&neutral.colorize(COST_PIP));
            }
            out.push(' ');
        }
        out
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.name, self.element.colored_name())?;
        let neutral = Element::new("Neutral").neutral();
        writeln!(f, "  Cost: {}", self.cost_pips(&neutral))?;
        writeln!(f, "  Power: {}", self.power())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire() -> Element {
        Element::new("Fire")
    }

    fn neutral() -> Element {
        Element::new("Neutral").neutral()
    }

    #[test]
    fn test_power_cost_one_elemental() {
        let ability = Ability::new("Ember", fire(), 1, false);
        assert_eq!(ability.power(), 20);
        assert_eq!(ability.elemental_cost(), 1);
    }

    #[test]
    fn test_power_neutral() {
        let ability = Ability::new("Tackle", neutral(), 4, false);
        assert_eq!(ability.power(), 40);
        assert_eq!(ability.elemental_cost(), 0);
    }

    #[test]
    fn test_power_pure_vs_mixed() {
        let pure = Ability::new("Inferno", fire(), 3, false);
        assert_eq!(pure.power(), 50);
        assert_eq!(pure.elemental_cost(), 3);

        let mixed = Ability::new("Flame Jab", fire(), 3, true);
        assert_eq!(mixed.power(), 40);
        assert_eq!(mixed.elemental_cost(), 2); // ceil(3/2)
    }

    #[test]
    fn test_elemental_cost_invariant() {
        for cost in 1..=4 {
            for mixed in [false, true] {
                let ability = Ability::new("X", fire(), cost, mixed);
                let elemental = ability.elemental_cost();
                assert!(elemental <= ability.cost);
                if mixed {
                    assert_eq!(elemental, cost.div_ceil(2));
                }

                let neutral_ability = Ability::new("X", neutral(), cost, false);
                assert_eq!(neutral_ability.elemental_cost(), 0);
            }
        }
    }

    #[test]
    fn test_identity_key() {
        let pure = Ability::new("Ember", fire(), 2, false);
        assert_eq!(pure.identity_key(), "fire_2_pure_standard");

        let mixed = Ability::new("Flame Jab", fire(), 3, true);
        assert_eq!(mixed.identity_key(), "fire_3_mixed_standard");

        // Stable across name changes - identity is stats only.
        let renamed = Ability::new("Other", fire(), 2, false);
        assert_eq!(renamed.identity_key(), pure.identity_key());
    }

    #[test]
    fn test_cost_elements() {
        let mixed = Ability::new("Flame Jab", fire(), 3, true);
        assert_eq!(
            mixed.cost_elements("Neutral"),
            vec!["Fire", "Fire", "Neutral"]
        );

        let neutral_ability = Ability::new("Tackle", neutral(), 2, false);
        assert_eq!(neutral_ability.cost_elements("Neutral"), vec!["Neutral", "Neutral"]);
    }

    #[test]
    #[should_panic(expected = "outside [1, 4]")]
    fn test_zero_cost_rejected() {
        Ability::new("Nothing", fire(), 0, false);
    }

    #[test]
    #[should_panic(expected = "outside [1, 4]")]
    fn test_over_cost_rejected() {
        Ability::new("Too Big", fire(), 5, false);
    }
}
