//! Random number sources.
//!
//! Generation code never reaches for a global generator: every call takes a
//! `RandomSource` explicitly, which production code builds from an
//! [`Entropy`] choice and tests replace with a seeded or scripted source.

use rand::rngs::{OsRng, ThreadRng};
use rand::{Rng, RngCore};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "empty range");
        self.gen_range(0..bound)
    }
}

// =============================================================================
// Entropy
// =============================================================================

/// Which cryptographically secure generator backs a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entropy {
    /// Thread-local ChaCha generator, reseeded from the OS.
    #[default]
    Thread,
    /// Every draw goes to the OS generator (`getrandom`).
    Os,
}

impl Entropy {
    pub fn name(self) -> &'static str {
        match self {
            Entropy::Thread => "thread CSPRNG (ChaCha, OS-seeded)",
            Entropy::Os => "OS generator",
        }
    }

    /// Build a fresh source for one generation call.
    pub fn source(self) -> Source {
        match self {
            Entropy::Thread => Source::Thread(rand::thread_rng()),
            Entropy::Os => Source::Os(OsRng),
        }
    }
}

/// Source owned by a single generation call.
pub enum Source {
    Thread(ThreadRng),
    Os(OsRng),
}

impl RandomSource for Source {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        match self {
            Source::Thread(rng) => rng.below(bound),
            Source::Os(rng) => rng.below(bound),
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Deterministic sources for tests.

    use super::RandomSource;

    /// Replays a fixed script of values, each reduced modulo the bound.
    pub struct Scripted {
        values: Vec<usize>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(values: &[usize]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }

        pub fn consumed(&self) -> usize {
            self.pos
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, bound: usize) -> usize {
            let value = self.values.get(self.pos).copied().unwrap_or(0);
            self.pos += 1;
            value % bound
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn below_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in 1..200 {
            assert!(rng.below(bound) < bound);
        }
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut source = Entropy::Thread.source();
        for _ in 0..100 {
            assert_eq!(source.below(1), 0);
        }
    }

    #[test]
    fn os_source_covers_small_range() {
        let mut source = Entropy::Os.source();
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[source.below(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn scripted_source_replays_modulo_bound() {
        let mut source = testing::Scripted::new(&[5, 12, 3]);
        assert_eq!(source.below(4), 1);
        assert_eq!(source.below(10), 2);
        assert_eq!(source.below(10), 3);
        assert_eq!(source.consumed(), 3);
    }
}
