//! Seeded jitter for the procedural palm.
//!
//! Each frond draws from its own `ChaCha8Rng` stream keyed by the layout seed
//! and the branch index, so a frond's shape does not depend on how many other
//! fronds were generated before it, and re-generating the tree yields the
//! exact same geometry.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_LAYOUT_SEED;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutSeed(pub u64);

impl Default for LayoutSeed {
    fn default() -> Self {
        Self(DEFAULT_LAYOUT_SEED)
    }
}

impl LayoutSeed {
    /// RNG for one frond: same seed and index, same sequence.
    pub fn branch_rng(self, branch_index: usize) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.0);
        rng.set_stream(branch_index as u64);
        rng
    }
}

/// Uniform sample in `[0, 1)`.
#[inline]
pub fn unit(rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>()
}

/// Uniform sample in `[-width / 2, width / 2)`.
#[inline]
pub fn centered(rng: &mut impl Rng, width: f32) -> f32 {
    (unit(rng) - 0.5) * width
}
