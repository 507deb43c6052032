//! Tests for tiled ordered dithering

#[cfg(test)]
mod tests {
    use halftone::ordered::{BayerMatrix, OrderedDither, ThresholdMatrix};
    use halftone::quantize::OutputLevels;
    use ndarray::{Array2, array};
    use std::sync::Arc;

    fn bayer(size: usize) -> OrderedDither {
        let Ok(dither) = OrderedDither::bayer(size) else {
            unreachable!("size {size} is valid");
        };
        dither
    }

    // Tests mid-gray against the 2 x 2 thresholds
    // Verified by inverting the comparison
    #[test]
    fn test_mid_gray_pattern() {
        let output = bayer(2).apply(&Array2::from_elem((4, 4), 128.0));

        let tile = array![[255.0, 0.0], [0.0, 255.0]];
        for ((row, col), &value) in output.indexed_iter() {
            assert!((value - tile[[row % 2, col % 2]]).abs() < f32::EPSILON);
        }
    }

    // Tests a pixel equal to its threshold goes low
    #[test]
    fn test_tie_goes_low() {
        let thresholds = Arc::new(ThresholdMatrix::from_index(&BayerMatrix::base(), 4.0));
        let dither = OrderedDither::new(thresholds, OutputLevels::UNIT);

        let output = dither.apply(&array![[1.5, 2.6], [3.5, 0.6]]);
        assert_eq!(output, array![[0.0, 1.0], [0.0, 1.0]]);
    }

    // Tests mid-gray lights exactly the cells whose threshold lies below it
    // Verified by the 16 x 16 tile, where bin 128 is centered at 127.998 and turns white
    #[test]
    fn test_mid_gray_density_for_every_size() {
        for size in [2, 4, 8, 16] {
            let dither = bayer(size);
            let output = dither.apply(&Array2::from_elem((size, size), 128.0));
            let white = output.iter().filter(|&&v| v == 255.0).count();

            let below = dither.thresholds().values().iter().filter(|&&t| t < 128.0).count();
            assert_eq!(white, below, "size {size}");
            assert!(white.abs_diff(size * size / 2) <= 1, "size {size}: {white} white");
        }

        let white = bayer(16).apply(&Array2::from_elem((16, 16), 128.0));
        assert_eq!(white.iter().filter(|&&v| v == 255.0).count(), 129);
    }

    #[test]
    fn test_extremes() {
        let dither = bayer(8);

        assert!(dither.apply(&Array2::zeros((9, 9))).iter().all(|&v| v == 0.0));
        assert!(
            dither
                .apply(&Array2::from_elem((9, 9), 255.0))
                .iter()
                .all(|&v| v == 255.0)
        );
    }

    // Tests dithering carries no state between calls
    #[test]
    fn test_idempotent() {
        let dither = bayer(4);
        let input = Array2::from_shape_fn((7, 5), |(r, c)| ((r * 31 + c * 17) % 256) as f32);

        assert_eq!(dither.apply(&input), dither.apply(&input));
        let binary = dither.apply(&input);
        assert_eq!(dither.apply(&binary), binary);
    }

    #[test]
    fn test_bayer_rejects_invalid_size() {
        assert!(OrderedDither::bayer(6).is_err());
        assert_eq!(bayer(4).thresholds().size(), 4);
    }
}
