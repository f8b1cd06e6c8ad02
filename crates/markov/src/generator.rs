//! Pluggable draw sources for weighted selection.

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::MarkovError;

/// A source of integer draws in `[0, bound)`.
///
/// A chain owns exactly one generator and threads it through every weighted
/// selection it performs, so replacing the generator changes the outcome of
/// every subsequent pick. Two implementations exist: [`RandomNumberGenerator`]
/// for genuine uniform draws, and [`ReplayNumberGenerator`] for reproducing a
/// recorded draw sequence.
pub trait NumberGenerator: fmt::Debug {
    /// Returns the next draw, expected to lie in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Implementation-specific; see [`RandomNumberGenerator`] and
    /// [`ReplayNumberGenerator`].
    fn next(&mut self, bound: usize) -> Result<usize, MarkovError>;
}

/// Uniform draws backed by a seedable RNG.
#[derive(Debug)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible generator from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGenerator for RandomNumberGenerator {
    /// Draws uniformly from `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidBound`] if `bound` is zero.
    fn next(&mut self, bound: usize) -> Result<usize, MarkovError> {
        if bound == 0 {
            return Err(MarkovError::InvalidBound { bound });
        }
        Ok(self.rng.random_range(0..bound))
    }
}

/// Replays a recorded sequence of draws.
///
/// Each call to `next` consumes one recorded value and returns it regardless
/// of `bound`: whoever recorded the sequence is responsible for values
/// consistent with the distributions they will be drawn against. An empty
/// recording is valid and is exhausted immediately.
#[derive(Debug, Clone)]
pub struct ReplayNumberGenerator {
    draws: Vec<usize>,
    cursor: usize,
}

impl ReplayNumberGenerator {
    /// Creates a generator that will replay `draws` in order.
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of recorded draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.cursor
    }
}

impl NumberGenerator for ReplayNumberGenerator {
    /// Returns the next recorded draw, ignoring `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::ReplayExhausted`] once every recorded draw has
    /// been consumed.
    fn next(&mut self, _bound: usize) -> Result<usize, MarkovError> {
        let value = self
            .draws
            .get(self.cursor)
            .copied()
            .ok_or(MarkovError::ReplayExhausted)?;
        self.cursor += 1;
        Ok(value)
    }
}
