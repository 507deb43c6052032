//! Tests for Bayer matrix memoization

#[cfg(test)]
mod tests {
    use halftone::ordered::BayerMatrix;
    use halftone::ordered::cache::{MatrixCache, index_matrix, threshold_matrix};
    use std::sync::Arc;

    #[test]
    fn test_cache_new() {
        let cache = MatrixCache::new();

        assert!(cache.is_empty());
        assert_eq!(cache.stats.hits, 0);
        assert_eq!(cache.stats.misses, 0);
    }

    // Tests building one size caches every smaller power of two
    // Verified by building each size from scratch without recursion
    #[test]
    fn test_build_caches_intermediate_sizes() {
        let mut cache = MatrixCache::new();

        let Ok(matrix) = cache.index_matrix(8) else {
            unreachable!("size 8 is valid");
        };
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats.misses, 3);
        assert_eq!(cache.stats.hits, 0);
        assert_eq!(BayerMatrix::build(8).ok().as_ref(), Some(matrix.as_ref()));

        assert!(cache.index_matrix(4).is_ok());
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(cache.stats.misses, 3);
    }

    // Tests the threshold tier counts its own misses and hits
    // Verified by one threshold miss plus three index misses for size 8
    #[test]
    fn test_threshold_matrix_hits() {
        let mut cache = MatrixCache::new();

        let first = cache.threshold_matrix(8);
        assert_eq!(cache.stats.misses, 4);
        assert_eq!(cache.stats.hits, 0);

        let second = cache.threshold_matrix(8);
        assert!(matches!((&first, &second), (Ok(a), Ok(b)) if Arc::ptr_eq(a, b)));
        assert_eq!(cache.stats.misses, 4);
        assert_eq!(cache.stats.hits, 1);
    }

    // Tests a threshold lookup over an already cached index matrix
    // Verified by the index tier reporting a hit and the threshold tier a miss
    #[test]
    fn test_threshold_matrix_reuses_index() {
        let mut cache = MatrixCache::new();

        assert!(cache.index_matrix(4).is_ok());
        assert_eq!(cache.stats.misses, 2);

        let thresholds = cache.threshold_matrix(4);
        assert!(thresholds.is_ok_and(|t| t.size() == 4));
        assert_eq!(cache.stats.misses, 3);
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(cache.len(), 2);
    }

    // Tests invalid sizes are rejected without touching the cache
    #[test]
    fn test_invalid_size_not_cached() {
        let mut cache = MatrixCache::new();

        assert!(cache.index_matrix(12).is_err());
        assert!(cache.threshold_matrix(1).is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.stats.misses, 0);
    }

    #[test]
    fn test_shared_cache_returns_same_matrix() {
        let first = index_matrix(16);
        let second = index_matrix(16);
        assert!(matches!((&first, &second), (Ok(a), Ok(b)) if Arc::ptr_eq(a, b)));

        let thresholds = threshold_matrix(16);
        assert!(thresholds.is_ok_and(|t| t.size() == 16));
    }
}
