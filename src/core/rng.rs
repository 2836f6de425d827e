//! Deterministic random number generation for simulation callers.
//!
//! The move engine itself never draws random numbers. `GameRng` exists for
//! code that drives many moves: random playouts, benchmarks, and tests that
//! need reproducible rounds.
//!
//! ```
//! use kalah_engine::core::GameRng;
//!
//! let pits = [0usize, 2, 3, 5];
//!
//! // Same seed, same fork counter: same choices
//! let mut branch = GameRng::new(42).fork();
//! let mut branch2 = GameRng::new(42).fork();
//! assert_eq!(branch.choose(&pits), branch2.choose(&pits));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Split off an independent stream, e.g. one per simulated round.
    ///
    /// The n-th fork of a given seed always yields the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let branch_seed = self.seed ^ self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self::new(branch_seed)
    }

    /// Pick one element uniformly, or `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
