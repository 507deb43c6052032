//! Halftoning constants and runtime configuration defaults

/// Largest 8-bit sample value
pub const MAX_LEVEL: f32 = 255.0;

/// Default threshold for scalar quantization
pub const DEFAULT_THRESHOLD: f32 = 128.0;

// Default raw image geometry
/// Default raw image width in pixels
pub const DEFAULT_WIDTH: usize = 1280;
/// Default raw image height in pixels
pub const DEFAULT_HEIGHT: usize = 852;

/// Bayer matrix sizes used when none are requested
pub const DEFAULT_BAYER_SIZES: [usize; 3] = [2, 8, 32];

/// Smallest legal Bayer matrix size
pub const MIN_BAYER_SIZE: usize = 2;

// Keeps N² comfortably inside u32 and the cache small
/// Largest legal Bayer matrix size
pub const MAX_BAYER_SIZE: usize = 1024;

/// Fixed seed for reproducible random thresholding
pub const DEFAULT_SEED: u64 = 42;

/// Tolerance when checking that kernel weights sum to the divisor
pub const MASS_TOLERANCE: f32 = 1e-6;

// Output settings
/// Extension of raw image files
pub const RAW_EXTENSION: &str = "raw";
/// Extension of preview images
pub const PREVIEW_EXTENSION: &str = "png";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
