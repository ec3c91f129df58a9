//! Reproducible pseudo-random test grids

use crate::error::TestResult;
use seamstitch_core::Grid;

/// Simple linear congruential generator for reproducible randomness
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Seeded generator; the same seed always yields the same sequence
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed as u64,
        }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform integer in `0..bound`
    ///
    /// `bound` must be positive.
    pub fn below(&mut self, bound: u32) -> u32 {
        // high bits of an LCG are the well-mixed ones
        ((self.next_u64() >> 33) % bound as u64) as u32
    }

    /// A `width` x `height` grid of values in `0..bound`
    pub fn grid(&mut self, width: u32, height: u32, bound: u32) -> TestResult<Grid<u32>> {
        let data = (0..width * height).map(|_| self.below(bound)).collect();
        Ok(Grid::from_data(width, height, data)?)
    }
}
