//! Sample arithmetic for work buffers
//!
//! The diffusion engine is written once against [`Sample`], so grayscale
//! intensities and RGB triples flow through the same pass. Channels are
//! single precision throughout, so accumulated error rounds the same way in
//! every pass.

use num_traits::Zero;
use std::ops::{AddAssign, Mul, Sub};

/// The fixed eight-color vertex palette
pub mod palette;
/// Three-channel floating-point color samples
pub mod rgb;

pub use palette::Vertex;
pub use rgb::Rgb;

/// A value stored in a work buffer
///
/// Samples are unconstrained while error accumulates; they are clamped only
/// when converted back to bytes.
pub trait Sample:
    Copy + Zero + Sub<Output = Self> + Mul<f32, Output = Self> + AddAssign
{
}

impl<T> Sample for T where
    T: Copy + Zero + Sub<Output = Self> + Mul<f32, Output = Self> + AddAssign
{
}
