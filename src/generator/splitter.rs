//! Ability cost splitter.
//!
//! Turns a card's ability-point allotment into one or two concrete ability
//! costs, each in `[1, 4]`, summing exactly to the allotment. Cards are
//! capped at two abilities; the first branch always maxes the primary
//! ability before spending the remainder.

use smallvec::{smallvec, SmallVec};

use crate::core::GenRng;

/// Largest ability-point total the splitter accepts.
///
/// The assembler can produce at most `4 + 2 + 2` points with nothing
/// sacrificed to HP; anything above that cannot satisfy both the exact-sum
/// and per-cost `[1, 4]` guarantees under the two-ability cap.
pub const MAX_ABILITY_POINTS: u32 = 8;

/// Split ability points into 1-2 per-ability costs.
///
/// Policy, first match wins:
/// 1. `points >= 6`: `[4, points - 4]`
/// 2. `points >= 4`: first cost drawn from `{3, 4}`; a 4 stands alone,
///    a 3 is followed by the remainder
/// 3. `points == 3`: always `[2, 1]` at rarity 0, else a coin flip
///    between `[3]` and `[2, 1]`
/// 4. otherwise: a single ability worth the whole allotment
///
/// Every returned cost is in `[1, 4]` and the costs sum to
/// `ability_points`. Panics when `ability_points` is 0 or above
/// [`MAX_ABILITY_POINTS`].
pub fn split_ability_costs(
    ability_points: u32,
    rarity_index: usize,
    rng: &mut GenRng,
) -> SmallVec<[u32; 2]> {
    assert!(ability_points >= 1, "ability points must be positive");
    assert!(
        ability_points <= MAX_ABILITY_POINTS,
        "ability points {ability_points} above cap {MAX_ABILITY_POINTS}"
    );

    if ability_points >= 6 {
        smallvec![4, ability_points - 4]
    } else if ability_points >= 4 {
        let first_cost = rng.roll_inclusive(3, 4);
        if first_cost == 4 {
            // Points above 4 are discarded here; with exactly 4 nothing
            // is lost, and 5 only reaches this branch via the draw.
            smallvec![4]
        } else {
            smallvec![3, ability_points - 3]
        }
    } else if ability_points == 3 {
        if rarity_index < 1 {
            smallvec![2, 1]
        } else if rng.chance(0.5) {
            smallvec![3]
        } else {
            smallvec![2, 1]
        }
    } else {
        smallvec![ability_points]
    }
}
