//! The year step - advances the world by one simulated year

pub mod advance;
pub mod diplomacy;
pub mod economy;
pub mod population;
pub mod technology;

pub use advance::advance;

use rand::Rng;

/// Uniform integer step in [-5, +5]
///
/// Both trust fluctuation and trade-route drift use this shape: eleven
/// equally likely outcomes centered on zero.
pub(crate) fn uniform_step<R: Rng>(rng: &mut R) -> i32 {
    (rng.gen::<f64>() * 11.0).floor() as i32 - 5
}
