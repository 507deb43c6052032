//! Input/output operations, configuration and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and I/O context helpers
pub mod error;
/// PNG preview export
pub mod image;
/// Progress display for halftoning jobs
pub mod progress;
/// Headerless fixed-size raw pixel buffers
pub mod raw;
