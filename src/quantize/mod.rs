//! Per-pixel quantizers
//!
//! A quantizer sees both the undiffused input sample and the working sample
//! that already carries diffused error. Scalar thresholding only looks at the
//! working value; MBVQ uses the original to pick a quadrant.

use crate::sample::Sample;

/// Two-level thresholding of intensities
pub mod scalar;
/// Minimum brightness variation quadrant and nearest-vertex selection
pub mod vertex;

pub use scalar::{OutputLevels, ScalarQuantizer};
pub use vertex::{MbvqQuantizer, Quadrant};

/// Maps a working sample to a legal output sample
pub trait Quantizer {
    /// Sample type consumed and produced
    type Sample: Sample;

    /// Quantize `working`, which derives from the undiffused `original`
    fn quantize(&self, original: Self::Sample, working: Self::Sample) -> Self::Sample;
}
