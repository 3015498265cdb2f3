//! Ready-made theme configurations.

pub mod classic;

pub use classic::classic_theme;
