//! Deterministic RNG used to pick building variants.
//!
//! Wraps `ChaCha8Rng` so identical seeds give identical towns on every
//! platform.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DEFAULT_SEED: u64 = 42;

#[derive(Resource)]
pub struct BuildRng(pub ChaCha8Rng);

impl Default for BuildRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl BuildRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
