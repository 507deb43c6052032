//! Bi-level quantization of scalar intensities

use crate::io::configuration::{DEFAULT_THRESHOLD, MAX_LEVEL};
use crate::quantize::Quantizer;

/// The two output levels of bi-level quantization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputLevels {
    /// Level emitted below the threshold
    pub low: f32,
    /// Level emitted at or above the threshold
    pub high: f32,
}

impl OutputLevels {
    /// Black and white for 8-bit samples
    pub const BINARY_8BIT: Self = Self {
        low: 0.0,
        high: MAX_LEVEL,
    };

    /// Unit interval levels
    pub const UNIT: Self = Self {
        low: 0.0,
        high: 1.0,
    };
}

impl Default for OutputLevels {
    fn default() -> Self {
        Self::BINARY_8BIT
    }
}

/// Threshold quantizer for a single intensity
///
/// Values equal to the threshold go to the high level by convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarQuantizer {
    /// Decision threshold
    pub threshold: f32,
    /// Output levels
    pub levels: OutputLevels,
}

impl ScalarQuantizer {
    /// Create a quantizer with an explicit threshold and levels
    pub const fn new(threshold: f32, levels: OutputLevels) -> Self {
        Self { threshold, levels }
    }

    /// Map `value` to the low or high level
    pub fn quantize_value(&self, value: f32) -> f32 {
        quantize(value, self.threshold, self.levels)
    }
}

impl Default for ScalarQuantizer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, OutputLevels::BINARY_8BIT)
    }
}

impl Quantizer for ScalarQuantizer {
    type Sample = f32;

    fn quantize(&self, _original: f32, working: f32) -> f32 {
        self.quantize_value(working)
    }
}

/// Threshold a single value; ties go to `levels.high`
pub fn quantize(value: f32, threshold: f32, levels: OutputLevels) -> f32 {
    if value >= threshold {
        levels.high
    } else {
        levels.low
    }
}
