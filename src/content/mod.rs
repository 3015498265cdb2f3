//! Content system: styles, creature catalogs, theme configuration.
//!
//! ## Key Types
//!
//! - `Style`: layered visual/narrative identity of a card
//! - `Detail`/`Archetype`: catalog entries the composer draws from
//! - `Catalog`: per-element content tables
//! - `Theme`: the full passed-in configuration for a collection run

pub mod catalog;
pub mod style;
pub mod theme;

pub use catalog::{Archetype, Catalog, Detail};
pub use style::Style;
pub use theme::Theme;
