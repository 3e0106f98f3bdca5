//! Deterministic simulation RNG.
//!
//! Vehicle speeds are drawn once at fleet initialisation.  Drawing them from
//! a seeded `SmallRng` instead of an ambient thread RNG means the same seed
//! and seed list always produce the same fleet, which keeps runs and tests
//! reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only from the single coordinating context that owns the fleet.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
