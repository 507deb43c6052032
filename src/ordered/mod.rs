//! Ordered dithering and global thresholding

/// Recursive index matrices and derived thresholds
pub mod bayer;
/// Process-wide memoization of Bayer matrices
pub mod cache;
/// Tiled threshold matrix dithering
pub mod dither;
/// Fixed and seeded random thresholding
pub mod threshold;

pub use bayer::{BayerMatrix, ThresholdMatrix};
pub use dither::OrderedDither;
pub use threshold::{RandomThreshold, fixed_threshold};
