//! Core generation plumbing: the deterministic RNG stream.
//!
//! Everything random in the generator draws from one `GenRng` owned by the
//! collection run, which is what makes generation reproducible per seed.

pub mod rng;

pub use rng::{GenRng, GenRngState};
