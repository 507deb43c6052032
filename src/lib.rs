//! Error diffusion halftoning and ordered dithering for raw raster images
//!
//! Continuous-tone grayscale and RGB samples are reduced to bi-level output
//! (or to the eight MBVQ vertex colors) by a kernel-driven error diffusion
//! engine, by tiled Bayer threshold matrices, or by global thresholding.

#![forbid(unsafe_code)]

/// Error diffusion kernels, scan order policies and the diffusion engine
pub mod diffusion;
/// Input/output operations, configuration and error handling
pub mod io;
/// Bayer matrix construction, ordered dithering and global thresholding
pub mod ordered;
/// Per-pixel quantizers mapping working samples to discrete output
pub mod quantize;
/// Sample arithmetic shared by the engines and the fixed vertex palette
pub mod sample;

pub use io::error::{HalftoneError, Result};
