//! Memoized Bayer matrices
//!
//! Index and threshold matrices are built once per size and shared behind
//! [`Arc`]. Every lookup, in either tier, counts as one hit or one miss.

use crate::io::configuration::MAX_LEVEL;
use crate::io::error::Result;
use crate::ordered::bayer::{BayerMatrix, ThresholdMatrix, validate_size};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

/// Memoization cache for Bayer index and 8-bit threshold matrices
///
/// Matrices depend only on their size, so entries are never invalidated.
/// Building size N also caches every smaller power of two on the way.
#[derive(Default, Debug)]
pub struct MatrixCache {
    /// Index matrices keyed by size
    index: HashMap<usize, Arc<BayerMatrix>>,

    /// Thresholds for `MAX_LEVEL` keyed by size
    thresholds: HashMap<usize, Arc<ThresholdMatrix>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl MatrixCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve or build the index matrix of `size`
    ///
    /// # Errors
    ///
    /// Returns [`crate::HalftoneError::InvalidMatrixSize`] for sizes that are
    /// not supported powers of two
    pub fn index_matrix(&mut self, size: usize) -> Result<Arc<BayerMatrix>> {
        validate_size(size)?;
        Ok(self.index_matrix_unchecked(size))
    }

    // `size` is a validated power of two, so halving always reaches 2
    fn index_matrix_unchecked(&mut self, size: usize) -> Arc<BayerMatrix> {
        if let Some(matrix) = self.index.get(&size) {
            self.stats.hits += 1;
            return Arc::clone(matrix);
        }
        self.stats.misses += 1;

        let matrix = if size <= 2 {
            BayerMatrix::base()
        } else {
            self.index_matrix_unchecked(size / 2).expand()
        };

        Arc::clone(self.index.entry(size).or_insert_with(|| Arc::new(matrix)))
    }

    /// Retrieve or derive the 8-bit threshold matrix of `size`
    ///
    /// # Errors
    ///
    /// Returns [`crate::HalftoneError::InvalidMatrixSize`] for sizes that are
    /// not supported powers of two
    pub fn threshold_matrix(&mut self, size: usize) -> Result<Arc<ThresholdMatrix>> {
        validate_size(size)?;
        if let Some(matrix) = self.thresholds.get(&size) {
            self.stats.hits += 1;
            return Ok(Arc::clone(matrix));
        }
        self.stats.misses += 1;

        let index = self.index_matrix_unchecked(size);
        let matrix = Arc::new(ThresholdMatrix::from_index(&index, MAX_LEVEL));
        self.thresholds.insert(size, Arc::clone(&matrix));
        Ok(matrix)
    }

    /// Number of cached index matrices
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

static SHARED: LazyLock<Mutex<MatrixCache>> = LazyLock::new(|| Mutex::new(MatrixCache::new()));

// Entries are immutable once inserted, so a poisoned lock still guards valid data
fn with_shared<T>(f: impl FnOnce(&mut MatrixCache) -> T) -> T {
    let mut cache = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut cache)
}

/// Process-wide cached index matrix of `size`
///
/// # Errors
///
/// Returns [`crate::HalftoneError::InvalidMatrixSize`] for sizes that are not
/// supported powers of two
pub fn index_matrix(size: usize) -> Result<Arc<BayerMatrix>> {
    with_shared(|cache| cache.index_matrix(size))
}

/// Process-wide cached 8-bit threshold matrix of `size`
///
/// # Errors
///
/// Returns [`crate::HalftoneError::InvalidMatrixSize`] for sizes that are not
/// supported powers of two
pub fn threshold_matrix(size: usize) -> Result<Arc<ThresholdMatrix>> {
    with_shared(|cache| cache.threshold_matrix(size))
}

/// Snapshot of the process-wide cache statistics
pub fn shared_stats() -> CacheStats {
    with_shared(|cache| cache.stats)
}
