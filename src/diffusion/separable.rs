//! Separable color halftoning in CMY space
//!
//! Each RGB channel is inverted into its subtractive counterpart, halftoned
//! on its own with the scalar quantizer, and inverted back. Channels never
//! exchange error, so a fresh work buffer is used per channel.

use ndarray::Array2;

use crate::diffusion::engine::{Diffused, ErrorDiffusion};
use crate::diffusion::kernel::DiffusionKernel;
use crate::diffusion::scan::ScanOrder;
use crate::io::configuration::MAX_LEVEL;
use crate::quantize::ScalarQuantizer;
use crate::sample::Rgb;

/// Per-channel CMY error diffusion
#[derive(Debug, Clone, PartialEq)]
pub struct SeparableDiffusion {
    engine: ErrorDiffusion,
    quantizer: ScalarQuantizer,
}

impl SeparableDiffusion {
    /// Create a separable pass from an engine and per-channel quantizer
    pub const fn new(engine: ErrorDiffusion, quantizer: ScalarQuantizer) -> Self {
        Self { engine, quantizer }
    }

    /// Halftone `input` channel by channel
    ///
    /// The discarded mass is reported in RGB terms, so
    /// `sum(input) - sum(output)` equals it per channel.
    pub fn run(&self, input: &Array2<Rgb>) -> Diffused<Rgb> {
        let mut output = Array2::<Rgb>::default(input.dim());
        let mut discarded = [0.0; 3];

        for (channel, lost) in discarded.iter_mut().enumerate() {
            let plane = input.mapv(|pixel| {
                MAX_LEVEL - pixel.channels().get(channel).copied().unwrap_or_default()
            });
            let pass = self.engine.run(&plane, &self.quantizer);

            for (pixel, &cmy) in output.iter_mut().zip(pass.output.iter()) {
                let mut channels = pixel.channels();
                if let Some(value) = channels.get_mut(channel) {
                    *value = MAX_LEVEL - cmy;
                }
                *pixel = Rgb::from_channels(channels);
            }
            *lost = -pass.discarded;
        }

        Diffused {
            output,
            discarded: Rgb::from_channels(discarded),
        }
    }
}

impl Default for SeparableDiffusion {
    // Floyd-Steinberg in plain raster order, thresholded at the midpoint
    fn default() -> Self {
        Self::new(
            ErrorDiffusion::new(DiffusionKernel::floyd_steinberg(), ScanOrder::Raster),
            ScalarQuantizer::default(),
        )
    }
}
