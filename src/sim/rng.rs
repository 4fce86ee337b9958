//! Random source injected into the simulation
//!
//! Patrol turns and enemy fire are the only random decisions in the game.
//! They go through [`RandomSource`] so tests can swap the seeded generator
//! for a scripted one.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Direction;

/// The two random decisions the simulation makes
pub trait RandomSource {
    /// Returns true with the given probability (`p <= 0` never, `p >= 1` always)
    fn roll(&mut self, probability: f32) -> bool;

    /// Uniform pick among the four cardinal directions
    fn direction(&mut self) -> Direction;
}

impl RandomSource for Pcg32 {
    fn roll(&mut self, probability: f32) -> bool {
        self.random::<f32>() < probability
    }

    fn direction(&mut self) -> Direction {
        Direction::ALL[self.random_range(0..Direction::ALL.len())]
    }
}

/// Seeded production generator
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
