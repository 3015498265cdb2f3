//! Points budget allocation and the HP/ability split.
//!
//! Every card starts from an abstract point budget derived from its rarity
//! and its position inside an evolutionary series. Part of the budget is
//! sacrificed into bonus hit points; the rest becomes ability costs.

use crate::core::GenRng;

/// Budget floor: a rarity-0 standalone card gets exactly this many points.
pub const BASE_POINTS: u32 = 4;

/// One sacrificed ability point is worth this many HP points.
pub const ABILITY_TO_HP_PTS: u32 = 2;

/// Total ability-point budget for a card.
///
/// `series_position` is 1-based; standalone cards count as position 1.
/// Strictly non-decreasing in both arguments.
///
/// Panics on `series_position == 0` - out-of-domain inputs are caller bugs
/// and silently clamping them would corrupt reproducibility.
#[must_use]
pub fn points_budget(rarity_index: usize, series_position: usize) -> u32 {
    assert!(series_position >= 1, "series position is 1-based, got 0");
    BASE_POINTS + rarity_index as u32 + (series_position as u32 - 1)
}

/// Outcome of splitting a budget between HP and abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpSplit {
    /// Points sacrificed into bonus HP.
    pub hp_points: u32,
    /// Points left for ability costs.
    pub ability_points: u32,
}

/// Split a budget: up to half of it (uniform, inclusive) becomes HP points.
///
/// Panics on a zero budget.
pub fn split_hp(budget: u32, rng: &mut GenRng) -> HpSplit {
    assert!(budget > 0, "budget must be positive");
    let hp_points = rng.roll_inclusive(0, budget / 2);
    HpSplit {
        hp_points,
        ability_points: budget - hp_points,
    }
}

/// Final hit points for a card.
///
/// The whole budget sets the floor; sacrificed points compound on top.
#[must_use]
pub fn hp_value(budget: u32, hp_points: u32) -> u32 {
    10 * (budget + hp_points * ABILITY_TO_HP_PTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_floor() {
        assert_eq!(points_budget(0, 1), BASE_POINTS);
    }

    #[test]
    fn test_budget_formula() {
        for rarity_index in 0..4 {
            for series_position in 1..4 {
                assert_eq!(
                    points_budget(rarity_index, series_position),
                    4 + rarity_index as u32 + series_position as u32 - 1
                );
            }
        }
    }

    #[test]
    fn test_budget_monotonic() {
        for rarity_index in 0..4 {
            for series_position in 1..4 {
                let here = points_budget(rarity_index, series_position);
                assert!(points_budget(rarity_index + 1, series_position) >= here);
                assert!(points_budget(rarity_index, series_position + 1) >= here);
            }
        }
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn test_budget_position_zero() {
        points_budget(0, 0);
    }

    #[test]
    fn test_split_hp_bounds() {
        let mut rng = GenRng::new(42);
        for budget in 4..=8 {
            for _ in 0..100 {
                let split = split_hp(budget, &mut rng);
                assert!(split.hp_points <= budget / 2);
                assert_eq!(split.hp_points + split.ability_points, budget);
                // At least half the budget always stays with abilities.
                assert!(split.ability_points >= budget - budget / 2);
            }
        }
    }

    #[test]
    #[should_panic(expected = "budget must be positive")]
    fn test_split_hp_zero_budget() {
        let mut rng = GenRng::new(0);
        split_hp(0, &mut rng);
    }

    #[test]
    fn test_hp_value() {
        // No sacrifice: floor set by the budget alone.
        assert_eq!(hp_value(4, 0), 40);
        // Each sacrificed point is worth 2 HP points = 20 HP.
        assert_eq!(hp_value(4, 2), 80);
        assert_eq!(hp_value(8, 4), 160);
    }
}
