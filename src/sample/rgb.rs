//! Floating-point RGB samples

use num_traits::Zero;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// An RGB sample with unconstrained floating-point channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Create a sample from its three channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Widen an interleaved 8-bit pixel
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let [r, g, b] = bytes;
        Self::new(f32::from(r), f32::from(g), f32::from(b))
    }

    /// Build a sample from a `[r, g, b]` array
    pub const fn from_channels(channels: [f32; 3]) -> Self {
        let [r, g, b] = channels;
        Self::new(r, g, b)
    }

    /// Channels as a `[r, g, b]` array
    pub const fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamp each channel to `[0, 255]` and truncate to bytes
    pub fn to_bytes(self) -> [u8; 3] {
        self.channels().map(|c| c.clamp(0.0, 255.0) as u8)
    }

    /// Squared Euclidean distance in RGB space
    ///
    /// Channel differences are taken in single precision, squared and summed
    /// in double precision, then rounded once.
    pub fn distance_squared(self, other: Self) -> f32 {
        let d = self - other;
        d.channels()
            .iter()
            .map(|&c| f64::from(c).powi(2))
            .sum::<f64>() as f32
    }

    /// Sum of all three channels
    pub fn total(self) -> f32 {
        self.r + self.g + self.b
    }

    /// Apply `f` to every channel
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Neg for Rgb {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.r, -self.g, -self.b)
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Zero for Rgb {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.r.is_zero() && self.g.is_zero() && self.b.is_zero()
    }
}
