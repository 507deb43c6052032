//! Error diffusion kernels as immutable offset and weight tables
//!
//! A kernel is written as a weight matrix with an anchor cell marking the
//! current pixel. Each non-zero weight becomes a tap that receives
//! `error * weight / divisor` when the anchor pixel is quantized.

use crate::diffusion::scan::ScanOrder;
use crate::io::configuration::MASS_TOLERANCE;
use crate::io::error::{Result, invalid_kernel};

/// One neighbor receiving a share of the quantization error
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelTap {
    /// Row offset from the anchor (positive is below)
    pub row: isize,
    /// Column offset from the anchor (positive is ahead in a left-to-right scan)
    pub col: isize,
    /// Numerator of the error share
    pub weight: f32,
}

/// User-supplied kernel description
///
/// Mirrors the matrix form kernels are usually published in. Validation
/// happens in [`DiffusionKernel::from_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct KernelConfig {
    /// Row-major weight matrix
    pub weights: Vec<Vec<f32>>,
    /// Row of the current pixel inside `weights`
    pub anchor_row: usize,
    /// Column of the current pixel inside `weights`
    pub anchor_col: usize,
    /// Normalizing divisor applied to every weight
    pub divisor: f32,
    /// Whether odd rows are scanned right-to-left
    pub serpentine: bool,
}

impl KernelConfig {
    /// Scan order requested by the configuration
    pub const fn scan_order(&self) -> ScanOrder {
        if self.serpentine {
            ScanOrder::Serpentine
        } else {
            ScanOrder::Raster
        }
    }
}

/// Immutable diffusion kernel
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionKernel {
    name: String,
    taps: Vec<KernelTap>,
    divisor: f32,
    footprint: (usize, usize),
}

impl DiffusionKernel {
    /// Build a kernel from a weight matrix and anchor
    ///
    /// # Errors
    ///
    /// Returns [`crate::HalftoneError::InvalidKernel`] if:
    /// - The matrix is empty or its rows differ in length
    /// - The anchor lies outside the matrix
    /// - The anchor cell carries a non-zero weight
    /// - A weight is not finite
    /// - The divisor is not finite and positive
    pub fn from_matrix(
        name: impl Into<String>,
        weights: &[Vec<f32>],
        anchor: (usize, usize),
        divisor: f32,
    ) -> Result<Self> {
        let rows = weights.len();
        let cols = weights.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(invalid_kernel(&"weight matrix is empty"));
        }
        if let Some(row) = weights.iter().position(|row| row.len() != cols) {
            return Err(invalid_kernel(&format!(
                "row {row} has a different length than row 0 ({cols} columns)"
            )));
        }
        if anchor.0 >= rows || anchor.1 >= cols {
            return Err(invalid_kernel(&format!(
                "anchor ({}, {}) lies outside the {rows}x{cols} footprint",
                anchor.0, anchor.1
            )));
        }
        let anchor_weight = weights
            .get(anchor.0)
            .and_then(|row| row.get(anchor.1))
            .copied()
            .unwrap_or_default();
        if anchor_weight != 0.0 {
            return Err(invalid_kernel(&format!(
                "anchor carries weight {anchor_weight}; a pixel never receives its own error"
            )));
        }
        if weights.iter().flatten().any(|w| !w.is_finite()) {
            return Err(invalid_kernel(&"weights must be finite"));
        }
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(invalid_kernel(&format!(
                "divisor must be finite and positive, got {divisor}"
            )));
        }

        let rows_as_slices: Vec<&[f32]> = weights.iter().map(Vec::as_slice).collect();
        Ok(Self::from_rows(name, &rows_as_slices, anchor, divisor))
    }

    /// Build a kernel and scan order from a [`KernelConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`crate::HalftoneError::InvalidKernel`] under the same
    /// conditions as [`Self::from_matrix`]
    pub fn from_config(config: &KernelConfig) -> Result<(Self, ScanOrder)> {
        let kernel = Self::from_matrix(
            "custom",
            &config.weights,
            (config.anchor_row, config.anchor_col),
            config.divisor,
        )?;
        Ok((kernel, config.scan_order()))
    }

    // Callers guarantee a rectangular matrix with the anchor inside it
    fn from_rows(
        name: impl Into<String>,
        rows: &[&[f32]],
        anchor: (usize, usize),
        divisor: f32,
    ) -> Self {
        let mut taps = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &weight) in row.iter().enumerate() {
                if weight == 0.0 || (r, c) == anchor {
                    continue;
                }
                taps.push(KernelTap {
                    row: r as isize - anchor.0 as isize,
                    col: c as isize - anchor.1 as isize,
                    weight,
                });
            }
        }

        Self {
            name: name.into(),
            taps,
            divisor,
            footprint: (rows.len(), rows.first().map_or(0, |row| row.len())),
        }
    }

    /// Floyd-Steinberg kernel
    ///
    /// ```text
    ///        X   7
    ///    3   5   1
    /// ```
    ///
    /// Divisor 16.
    pub fn floyd_steinberg() -> Self {
        Self::from_rows(
            "floyd-steinberg",
            &[&[0.0, 0.0, 0.0], &[0.0, 0.0, 7.0], &[3.0, 5.0, 1.0]],
            (1, 1),
            16.0,
        )
    }

    /// Jarvis-Judice-Ninke kernel
    ///
    /// ```text
    ///            X   7   5
    ///    3   5   7   5   3
    ///    1   3   5   3   1
    /// ```
    ///
    /// Divisor 48.
    pub fn jarvis_judice_ninke() -> Self {
        Self::from_rows(
            "jarvis-judice-ninke",
            &[
                &[0.0, 0.0, 0.0, 0.0, 0.0],
                &[0.0, 0.0, 0.0, 0.0, 0.0],
                &[0.0, 0.0, 0.0, 7.0, 5.0],
                &[3.0, 5.0, 7.0, 5.0, 3.0],
                &[1.0, 3.0, 5.0, 3.0, 1.0],
            ],
            (2, 2),
            48.0,
        )
    }

    /// Stucki kernel
    ///
    /// ```text
    ///            X   8   4
    ///    2   4   8   4   2
    ///    1   2   4   2   1
    /// ```
    ///
    /// Divisor 42.
    pub fn stucki() -> Self {
        Self::from_rows(
            "stucki",
            &[
                &[0.0, 0.0, 0.0, 0.0, 0.0],
                &[0.0, 0.0, 0.0, 0.0, 0.0],
                &[0.0, 0.0, 0.0, 8.0, 4.0],
                &[2.0, 4.0, 8.0, 4.0, 2.0],
                &[1.0, 2.0, 4.0, 2.0, 1.0],
            ],
            (2, 2),
            42.0,
        )
    }

    /// Kernel name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Non-zero taps in row-major order
    pub fn taps(&self) -> &[KernelTap] {
        &self.taps
    }

    /// Normalizing divisor
    pub const fn divisor(&self) -> f32 {
        self.divisor
    }

    /// Matrix dimensions (rows, cols) the kernel was declared with
    pub const fn footprint(&self) -> (usize, usize) {
        self.footprint
    }

    /// Sum of all tap weights
    pub fn weight_sum(&self) -> f32 {
        self.taps.iter().map(|tap| tap.weight).sum()
    }

    /// Whether the kernel passes on exactly all of the error it receives
    pub fn is_conservative(&self) -> bool {
        (self.weight_sum() - self.divisor).abs() <= MASS_TOLERANCE * self.divisor
    }
}

/// The published kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelPreset {
    /// Floyd-Steinberg, serpentine by default
    FloydSteinberg,
    /// Jarvis-Judice-Ninke, raster by default
    JarvisJudiceNinke,
    /// Stucki, raster by default
    Stucki,
}

impl KernelPreset {
    /// Build the preset kernel
    pub fn kernel(self) -> DiffusionKernel {
        match self {
            Self::FloydSteinberg => DiffusionKernel::floyd_steinberg(),
            Self::JarvisJudiceNinke => DiffusionKernel::jarvis_judice_ninke(),
            Self::Stucki => DiffusionKernel::stucki(),
        }
    }

    /// Scan order the preset is conventionally run with
    pub const fn default_scan(self) -> ScanOrder {
        match self {
            Self::FloydSteinberg => ScanOrder::Serpentine,
            Self::JarvisJudiceNinke | Self::Stucki => ScanOrder::Raster,
        }
    }
}
