//! Synthetic climate and hydrology for Saurashtra districts.
//!
//! Produces one [`RawRecord`](sws_core::RawRecord) per district per day
//! from seasonal stochastic models. All randomness flows through a
//! caller-supplied RNG; [`rng::seeded_rng`] builds the deterministic
//! `ChaCha8Rng` the engine uses by default.

pub mod generator;
pub mod rng;
pub mod weather;

pub use generator::generate_dataset;
