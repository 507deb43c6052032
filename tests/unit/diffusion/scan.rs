//! Tests for scan order traversal and direction transforms

#[cfg(test)]
mod tests {
    use halftone::diffusion::{KernelTap, ScanDirection, ScanOrder};

    // Tests serpentine reverses odd rows only
    // Verified by reversing even rows instead
    #[test]
    fn test_serpentine_visit_order() {
        let visited: Vec<(usize, usize)> = ScanOrder::Serpentine
            .visit(3, 3)
            .map(|(r, c, _)| (r, c))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (1, 1),
                (1, 0),
                (2, 0),
                (2, 1),
                (2, 2),
            ]
        );
    }

    #[test]
    fn test_raster_visit_order() {
        let visited: Vec<_> = ScanOrder::Raster.visit(2, 2).collect();

        assert_eq!(
            visited,
            vec![
                (0, 0, ScanDirection::LeftToRight),
                (0, 1, ScanDirection::LeftToRight),
                (1, 0, ScanDirection::LeftToRight),
                (1, 1, ScanDirection::LeftToRight),
            ]
        );
    }

    #[test]
    fn test_empty_visit() {
        assert_eq!(ScanOrder::Serpentine.visit(0, 5).count(), 0);
        assert_eq!(ScanOrder::Raster.visit(5, 0).count(), 0);
    }

    #[test]
    fn test_mirror() {
        assert_eq!(ScanDirection::LeftToRight.mirror(2), 2);
        assert_eq!(ScanDirection::RightToLeft.mirror(2), -2);
        assert_eq!(ScanDirection::RightToLeft.mirror(0), 0);
    }

    // Tests targets left of column zero are rejected
    #[test]
    fn test_target() {
        let tap = KernelTap {
            row: 1,
            col: -1,
            weight: 3.0,
        };

        assert_eq!(ScanDirection::LeftToRight.target(0, 0, &tap), None);
        assert_eq!(ScanDirection::LeftToRight.target(0, 4, &tap), Some([1, 3]));
        assert_eq!(ScanDirection::RightToLeft.target(0, 0, &tap), Some([1, 1]));
    }

    #[test]
    fn test_default_is_raster() {
        assert_eq!(ScanOrder::default(), ScanOrder::Raster);
        assert_eq!(ScanOrder::Serpentine.direction(0), ScanDirection::LeftToRight);
        assert_eq!(ScanOrder::Serpentine.direction(3), ScanDirection::RightToLeft);
        assert_eq!(ScanOrder::Raster.direction(3), ScanDirection::LeftToRight);
    }
}
