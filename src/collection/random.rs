//! Random sources for shuffling.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Selects the pseudo-random generator used by [`Enumerable::shuffle`].
///
/// Every call builds its own generator, so no state is shared between
/// shuffles. A `Seeded` source yields the same permutation for the same
/// input every time.
///
/// [`Enumerable::shuffle`]: crate::collection::Enumerable::shuffle
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let sequence: Sequence<i32> = (1..=10).collect();
/// let first = sequence.shuffle(RandomSource::Seeded(1));
/// let second = sequence.shuffle(RandomSource::Seeded(1));
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RandomSource {
    /// Seeded from the system clock at the time of the call.
    #[default]
    System,
    /// Seeded from the given value; reproducible.
    Seeded(u64),
}

impl RandomSource {
    /// Resolves the seed this source stands for.
    pub fn seed(self) -> u64 {
        match self {
            Self::Seeded(seed) => seed,
            Self::System => {
                let seed = clock_seed();
                log::trace!("shuffle seeded from system clock: {seed}");
                seed
            }
        }
    }

    /// Builds the generator for this source.
    pub fn into_rng(self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed())
    }
}

impl From<u64> for RandomSource {
    fn from(seed: u64) -> Self {
        Self::Seeded(seed)
    }
}

// Only the low 64 bits of the nanosecond count vary between calls.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
