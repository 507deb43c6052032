//! Tests for per-channel CMY error diffusion

#[cfg(test)]
mod tests {
    use halftone::diffusion::SeparableDiffusion;
    use halftone::sample::{Rgb, Vertex};
    use ndarray::Array2;

    // Tests inversion moves the threshold tie to the other side
    // Verified by thresholding the RGB values directly
    #[test]
    fn test_threshold_in_cmy_space() {
        let separable = SeparableDiffusion::default();

        let light = separable.run(&Array2::from_elem((1, 1), Rgb::new(128.0, 128.0, 128.0)));
        assert_eq!(light.output[[0, 0]], Vertex::White.rgb());

        let dark = separable.run(&Array2::from_elem((1, 1), Rgb::new(127.0, 127.0, 127.0)));
        assert_eq!(dark.output[[0, 0]], Vertex::Black.rgb());
    }

    #[test]
    fn test_pure_colors_are_fixed_points() {
        let separable = SeparableDiffusion::default();

        for vertex in Vertex::ALL {
            let result = separable.run(&Array2::from_elem((3, 4), vertex.rgb()));
            assert!(result.output.iter().all(|&p| p == vertex.rgb()), "{vertex:?}");
            assert_eq!(result.discarded, Rgb::default());
        }
    }

    // Tests discarded mass is reported in RGB terms per channel
    // Verified by reporting the CMY discard without negation
    #[test]
    fn test_mass_conservation() {
        let input = Array2::from_shape_fn((10, 13), |(r, c)| {
            Rgb::new((r * 25) as f32, (c * 19) as f32, ((r * c) % 256) as f32)
        });
        let result = SeparableDiffusion::default().run(&input);

        let input_total = input.iter().fold(Rgb::default(), |acc, &p| acc + p);
        let output_total = result.output.iter().fold(Rgb::default(), |acc, &p| acc + p);
        let lost = input_total - output_total;
        let tolerance = 1e-3 * input.len() as f32;

        for (l, d) in lost.channels().iter().zip(result.discarded.channels()) {
            assert!((l - d).abs() < tolerance);
        }
        assert!(
            result
                .output
                .iter()
                .all(|&p| Vertex::from_rgb(p).is_some())
        );
    }

    // Tests channels never exchange error
    #[test]
    fn test_channels_are_independent() {
        let mixed = Array2::from_shape_fn((6, 6), |(r, c)| {
            Rgb::new(((r * 40 + c * 7) % 256) as f32, 0.0, 255.0)
        });
        let result = SeparableDiffusion::default().run(&mixed);

        assert!(result.output.iter().all(|p| p.g == 0.0 && p.b == 255.0));
    }
}
