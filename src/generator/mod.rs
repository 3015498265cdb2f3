//! The generation engine.
//!
//! ## Pipeline
//!
//! 1. `budget`: (rarity, series position) -> point budget, HP/ability split
//! 2. `splitter`: ability points -> 1-2 concrete costs
//! 3. `abilities`: costs -> abilities with element/mixed assignment
//! 4. `composer`: element/rarity/position -> layered visual style
//!
//! The `Collection` in the crate root drives these in order, pulling every
//! random decision from one seeded stream.

pub mod abilities;
pub mod budget;
pub mod composer;
pub mod splitter;

pub use abilities::{generate_abilities, roll_ability, MIXED_ELEMENT_CHANCE, NEUTRAL_ELEMENT_CHANCE};
pub use budget::{hp_value, points_budget, split_hp, HpSplit, ABILITY_TO_HP_PTS, BASE_POINTS};
pub use composer::{
    compose_style, phase_suffix, rarity_adjectives, series_adjectives, ComposeRequest,
};
pub use splitter::{split_ability_costs, MAX_ABILITY_POINTS};
