//! # monster-forge
//!
//! Procedurally generates decks of trading-card monsters: for a requested
//! element and rarity tier it derives combat statistics (hit points, one
//! or two abilities with elemental/neutral costs) and a layered visual
//! description, optionally chained into a 1-3 card evolutionary series
//! where later cards are strictly stronger and share a visual lineage.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: one seeded RNG stream per collection run; a fixed
//!    seed and request sequence reproduces every card exactly.
//!
//! 2. **Configuration Over Globals**: element sets, rarity ladders and
//!    creature catalogs are passed in as a `Theme`, so multiple themes can
//!    run side by side.
//!
//! 3. **Collaborators Behind Traits**: naming and description text come
//!    from external collaborators (`NameGenerator`, `CardNamer`); every
//!    failure falls back to placeholder text, never a broken card.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `mechanics`: elements, rarities, abilities, cards
//! - `content`: styles, creature catalogs, theme configuration
//! - `generator`: budget allocator, cost splitter, style composer
//! - `naming`: ability name table and naming collaborators
//! - `prompt`: image prompt rendering (exact downstream format)
//! - `collection`: the aggregate root and series assembler
//! - `themes`: ready-made theme configurations
//!
//! ## Example
//!
//! ```
//! use monster_forge::{classic_theme, Collection};
//!
//! let mut collection = Collection::builder("demo")
//!     .theme(classic_theme())
//!     .seed(42)
//!     .build();
//!
//! let fire = collection.theme.element_by_name("fire").unwrap().clone();
//! let series = collection.generate_series(&fire, 3, None);
//!
//! assert_eq!(series.len(), 3);
//! assert!(series.windows(2).all(|w| w[0].rarity.index <= w[1].rarity.index));
//! ```

pub mod collection;
pub mod content;
pub mod core;
pub mod generator;
pub mod mechanics;
pub mod naming;
pub mod prompt;
pub mod themes;

// Re-export commonly used types
pub use crate::collection::{Collection, CollectionBuilder, MAX_SERIES_LEN};

pub use crate::content::{Archetype, Catalog, Detail, Style, Theme};

pub use crate::core::{GenRng, GenRngState};

pub use crate::generator::{
    compose_style, hp_value, points_budget, split_ability_costs, split_hp, ComposeRequest,
    HpSplit, ABILITY_TO_HP_PTS, BASE_POINTS, MAX_ABILITY_POINTS, MIXED_ELEMENT_CHANCE,
    NEUTRAL_ELEMENT_CHANCE,
};

pub use crate::mechanics::{Ability, Card, Element, Rarity};

pub use crate::naming::{
    CardNamer, NameGenerator, NameTable, NamingError, PlaceholderNamer, FALLBACK_ABILITY_NAME,
    FALLBACK_CARD_NAME, FALLBACK_DESCRIPTION,
};

pub use crate::prompt::{image_prompt, visual_description};

pub use crate::themes::classic_theme;
