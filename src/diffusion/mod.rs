//! Error diffusion halftoning
//!
//! This module contains:
//! - Diffusion kernels as immutable offset and weight tables
//! - Scan order policies and kernel mirroring
//! - The generic single-pass diffusion engine
//! - Separable per-channel color diffusion

/// Single-pass diffusion engine generic over the quantizer
pub mod engine;
/// Kernel tables, validation and presets
pub mod kernel;
/// Raster and serpentine traversal
pub mod scan;
/// Per-channel CMY diffusion for RGB images
pub mod separable;

pub use engine::{Diffused, ErrorDiffusion};
pub use kernel::{DiffusionKernel, KernelConfig, KernelPreset, KernelTap};
pub use scan::{ScanDirection, ScanOrder};
pub use separable::SeparableDiffusion;
