//! Random reveal order.
//!
//! `RevealRng` wraps ChaCha8 so a session can be replayed from a seed.
//! Sessions without a seed draw one from the OS.
//!
//! ```
//! use wildcatch::core::RevealRng;
//!
//! let mut a = RevealRng::new(42);
//! let mut b = RevealRng::new(42);
//! let ids = [1, 2, 3, 4, 5];
//!
//! assert_eq!(a.choose(&ids), b.choose(&ids));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used to pick the next creature to reveal.
#[derive(Clone, Debug)]
pub struct RevealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RevealRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Use `seed` when given, entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose an element uniformly from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
