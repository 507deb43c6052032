//! Ordered dithering with a tiled threshold matrix
//!
//! Unlike error diffusion no state is carried between pixels: each output
//! depends only on its input and the threshold at `(row % N, col % N)`.

use ndarray::Array2;
use std::sync::Arc;

use crate::io::error::Result;
use crate::ordered::bayer::ThresholdMatrix;
use crate::ordered::cache::threshold_matrix;
use crate::quantize::OutputLevels;

/// Ordered dither engine
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedDither {
    thresholds: Arc<ThresholdMatrix>,
    levels: OutputLevels,
}

impl OrderedDither {
    /// Create an engine from a threshold matrix and output levels
    pub const fn new(thresholds: Arc<ThresholdMatrix>, levels: OutputLevels) -> Self {
        Self { thresholds, levels }
    }

    /// 8-bit engine using the cached Bayer thresholds of `size`
    ///
    /// # Errors
    ///
    /// Returns [`crate::HalftoneError::InvalidMatrixSize`] if `size` is not a
    /// supported power of two
    pub fn bayer(size: usize) -> Result<Self> {
        Ok(Self::new(threshold_matrix(size)?, OutputLevels::BINARY_8BIT))
    }

    /// Threshold matrix being tiled
    pub fn thresholds(&self) -> &ThresholdMatrix {
        &self.thresholds
    }

    /// Dither `input`
    ///
    /// A pixel equal to its threshold goes low, the opposite tie-break from
    /// scalar quantization.
    pub fn apply(&self, input: &Array2<f32>) -> Array2<f32> {
        let mut output = input.clone();
        for ((row, col), value) in output.indexed_iter_mut() {
            *value = if *value <= self.thresholds.tiled(row, col) {
                self.levels.low
            } else {
                self.levels.high
            };
        }
        output
    }
}
