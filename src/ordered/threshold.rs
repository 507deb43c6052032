//! Global thresholding without error propagation

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quantize::{OutputLevels, ScalarQuantizer};

/// Threshold every pixel against the same value
///
/// Values equal to the threshold go high.
pub fn fixed_threshold(input: &Array2<f32>, quantizer: &ScalarQuantizer) -> Array2<f32> {
    input.mapv(|value| quantizer.quantize_value(value))
}

/// Thresholding against independent uniform noise
///
/// Every pixel draws an integer threshold from `[0, 255]`. The generator is
/// seeded, so equal seeds reproduce equal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomThreshold {
    seed: u64,
}

impl RandomThreshold {
    /// Create a random thresholder with a fixed seed
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed in use
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Threshold `input` in row-major order
    pub fn apply(&self, input: &Array2<f32>, levels: OutputLevels) -> Array2<f32> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        input.mapv(|value| {
            let threshold = f32::from(rng.random_range(0..=u8::MAX));
            ScalarQuantizer::new(threshold, levels).quantize_value(value)
        })
    }
}
