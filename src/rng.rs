// src/rng.rs
//! Random number generation for the Monte Carlo estimator
//!
//! There is no process-wide seed. Every simulation either receives a
//! generator from its caller or builds its own streams from an explicit base
//! seed through [`RngFactory`], so concurrent or repeated pricings never
//! disturb each other's reproducibility.
//!
//! # Streams
//!
//! The chunked engine splits the sample budget into fixed-size chunks. Chunk
//! `i` of base seed `s` gets a ChaCha key holding both `s` and `i`, so every
//! (seed, chunk) pair owns a distinct stream: seed `s + 1` never replays a
//! chunk of seed `s`. The mapping (seed, chunk) → draws does not depend on
//! which thread runs the chunk, so serial and parallel runs see identical
//! numbers.
//!
//! Normal variates come from `rand_distr::StandardNormal` (Ziggurat).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Stream factory for reproducible chunked simulations
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Factory seeded from the thread RNG; the chosen seed is available
    /// through [`RngFactory::base_seed`] so the run can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Independent generator for chunk `stream_id`
    pub fn create_std_rng(&self, stream_id: u64) -> StdRng {
        StdRng::from_seed(stream_key(self.base_seed, stream_id))
    }
}

/// Key bytes 0..8 carry the base seed and 8..16 the stream id.
fn stream_key(base_seed: u64, stream_id: u64) -> <StdRng as SeedableRng>::Seed {
    let mut key = <StdRng as SeedableRng>::Seed::default();
    key[..8].copy_from_slice(&base_seed.to_le_bytes());
    key[8..16].copy_from_slice(&stream_id.to_le_bytes());
    key
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
