//! Simulation RNG.
//!
//! Wraps `ChaCha8Rng` so every randomised piece of the simulation (history
//! generation, tank drain, temperature redraw) draws from one explicit,
//! seedable source. Identical seeds produce identical sensor feeds, which is
//! what the tests rely on.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct SimRng(pub ChaCha8Rng);

impl SimRng {
    /// Deterministic RNG for a given seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// OS-entropy RNG for normal runs.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}
