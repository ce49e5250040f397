//! Core utilities: logging, randomness, easing, clock

#[macro_use]
pub mod log;
pub mod clock;
pub mod easing;
pub mod random;

pub use easing::Easing;
pub use random::Rng;
