//! Card mechanics: elements, rarity tiers, abilities, assembled cards.
//!
//! ## Key Types
//!
//! - `Element`: type affinity, identity by name
//! - `Rarity`: ordinal strength tier
//! - `Ability`: `(element, cost, mixed)` with derived power and costs
//! - `Card`: the finished card owned by a collection

pub mod ability;
pub mod card;
pub mod element;
pub mod rarity;

pub use ability::{Ability, COST_PIP};
pub use card::Card;
pub use element::Element;
pub use rarity::Rarity;
