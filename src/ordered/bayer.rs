//! Recursive Bayer index matrices and their threshold matrices
//!
//! `I(2) = [[1, 2], [3, 0]]`, and `I(2n)` tiles four copies of `I(n)`:
//!
//! ```text
//!    4·I(n) + 1   4·I(n) + 2
//!    4·I(n) + 3   4·I(n)
//! ```
//!
//! By induction every integer in `[0, N²)` appears exactly once.

use ndarray::Array2;

use crate::io::configuration::{MAX_BAYER_SIZE, MIN_BAYER_SIZE};
use crate::io::error::{HalftoneError, Result};

/// N x N permutation of `[0, N²)` used as a dither index set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BayerMatrix {
    indices: Array2<u32>,
}

impl BayerMatrix {
    /// The 2 x 2 base case
    pub fn base() -> Self {
        Self {
            indices: ndarray::array![[1, 2], [3, 0]],
        }
    }

    /// Build the index matrix of `size` without caching
    ///
    /// Prefer [`crate::ordered::cache::index_matrix`] for repeated lookups.
    ///
    /// # Errors
    ///
    /// Returns [`HalftoneError::InvalidMatrixSize`] if `size` is not a power
    /// of two within the supported range
    pub fn build(size: usize) -> Result<Self> {
        validate_size(size)?;
        let mut matrix = Self::base();
        while matrix.size() < size {
            matrix = matrix.expand();
        }
        Ok(matrix)
    }

    /// Build `I(2N)` from this `I(N)`
    pub fn expand(&self) -> Self {
        let half = self.size();
        let indices = Array2::from_shape_fn((2 * half, 2 * half), |(row, col)| {
            let offset = match (row < half, col < half) {
                (true, true) => 1,
                (true, false) => 2,
                (false, true) => 3,
                (false, false) => 0,
            };
            let v = self.get(row % half, col % half).unwrap_or_default();
            4 * v + offset
        });

        Self { indices }
    }

    /// Matrix side length
    pub fn size(&self) -> usize {
        self.indices.nrows()
    }

    /// Raw index grid
    pub const fn indices(&self) -> &Array2<u32> {
        &self.indices
    }

    /// Index at `(row, col)`, if inside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.indices.get([row, col]).copied()
    }

    /// Whether every value in `[0, N²)` appears exactly once
    pub fn is_permutation(&self) -> bool {
        let count = self.indices.len();
        let mut seen = vec![false; count];
        self.indices.iter().all(|&v| {
            seen.get_mut(v as usize)
                .is_some_and(|slot| !std::mem::replace(slot, true))
        })
    }
}

/// Per-cell thresholds derived from a [`BayerMatrix`]
///
/// `T[i][j] = (I[i][j] + 0.5) / N² · max_level`
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdMatrix {
    values: Array2<f32>,
}

impl ThresholdMatrix {
    /// Derive thresholds for samples ranging up to `max_level`
    pub fn from_index(index: &BayerMatrix, max_level: f32) -> Self {
        let cells = index.indices().len() as f32;
        Self {
            values: index
                .indices()
                .mapv(|v| (v as f32 + 0.5) / cells * max_level),
        }
    }

    /// Matrix side length
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    /// Raw threshold grid
    pub const fn values(&self) -> &Array2<f32> {
        &self.values
    }

    /// Threshold for image position `(row, col)` with the matrix tiled
    pub fn tiled(&self, row: usize, col: usize) -> f32 {
        let n = self.size();
        self.values
            .get([row % n, col % n])
            .copied()
            .unwrap_or_default()
    }
}

/// Check that `size` is a power of two in `[MIN_BAYER_SIZE, MAX_BAYER_SIZE]`
///
/// # Errors
///
/// Returns [`HalftoneError::InvalidMatrixSize`] describing the violation
pub fn validate_size(size: usize) -> Result<()> {
    if !size.is_power_of_two() {
        return Err(HalftoneError::InvalidMatrixSize {
            size,
            reason: "must be a power of two",
        });
    }
    if size < MIN_BAYER_SIZE {
        return Err(HalftoneError::InvalidMatrixSize {
            size,
            reason: "must be at least 2",
        });
    }
    if size > MAX_BAYER_SIZE {
        return Err(HalftoneError::InvalidMatrixSize {
            size,
            reason: "exceeds the largest supported size",
        });
    }
    Ok(())
}
