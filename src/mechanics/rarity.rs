//! Rarity tiers.
//!
//! A rarity is an identity value with an ordinal index. The index defines a
//! strict total order from weakest to strongest and feeds both the points
//! budget and the cost-splitter thresholds.

use serde::{Deserialize, Serialize};

/// Ordinal strength tier of a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rarity {
    /// Tier name (for display/export).
    pub name: String,

    /// Ordinal index; 0 is the weakest tier.
    pub index: usize,
}

impl Rarity {
    /// Create a new rarity tier.
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl PartialOrd for Rarity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rarity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let common = Rarity::new("common", 0);
        let uncommon = Rarity::new("uncommon", 1);
        let rare = Rarity::new("rare", 2);

        assert!(common < uncommon);
        assert!(uncommon < rare);

        let mut tiers = vec![rare.clone(), common.clone(), uncommon.clone()];
        tiers.sort();
        assert_eq!(tiers, vec![common, uncommon, rare]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rarity::new("rare", 2)), "rare");
    }
}
