//! Injectable randomness.
//!
//! Every random decision in the engine (shuffling, automated wildcard
//! placement, agent choices) goes through [`RandomSource`], so a host can
//! swap in a scripted source and assert exact outcomes.
//!
//! ## Sources
//!
//! - [`GameRng`]: seeded ChaCha8, deterministic per seed. Use for real play.
//! - [`SequenceRng`]: replays a fixed script. Use in tests.
//!
//! ```
//! use rust_tilecode::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_index(100), b.next_index(100));
//!
//! // Independent streams for independent concerns
//! let mut shuffle = a.for_context("shuffle");
//! let mut agent = a.for_context("agent");
//! let _ = (shuffle.next_index(10), agent.next_index(10));
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform random choices.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` must be non-zero.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Uniform real in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform permutation in place (Fisher–Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Uniform element of a slice, `None` when empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()))
    }

    /// Uniform real in `[low, high)`.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

impl<R: RandomSource> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed with good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }
}

/// Scripted random source.
///
/// Index requests pop from the index script (reduced modulo `upper`), unit
/// requests pop from the unit script. An exhausted script yields 0.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl SequenceRng {
    /// Script of index answers.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            units: VecDeque::new(),
        }
    }

    /// Add a script of unit answers, each clamped into `[0, 1)`.
    #[must_use]
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units = units
            .into_iter()
            .map(|u| u.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        self
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.indices.len() + self.units.len()
    }
}

impl RandomSource for SequenceRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % upper.max(1)
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}
