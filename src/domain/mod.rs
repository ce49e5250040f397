pub mod config;
pub mod particle;
pub mod shockwave;

pub use config::{ExplosionConfig, IntRange};
pub use particle::{Particle, Point};
pub use shockwave::{Shockwave, ShockwaveConfig};
