//! Uniform random sources
//!
//! Stochastic shapes (splats, fractal lines) draw from a [`UnitSource`]
//! handed to them by the caller. Quill never owns or seeds a generator.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A sampler producing values uniformly distributed in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Any `FnMut() -> f64` closure is a source.
impl<F: FnMut() -> f64> UnitSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Adapter over a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// The thread-local generator
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// A deterministic generator for reproducible drawings
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UnitSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Always returns the same value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl UnitSource for Constant {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of values.
///
/// An empty sequence yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    values: Vec<f64>,
    index: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }

    /// Number of values drawn so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl UnitSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}
