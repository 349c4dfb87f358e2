//! Core primitives.
//!
//! Randomness for drawing secrets.

pub mod rng;

pub use rng::{SecretRng, derive_session_seed};
