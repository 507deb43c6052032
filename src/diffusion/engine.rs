//! Single-pass error diffusion over a floating-point work buffer
//!
//! The pass is inherently sequential: every pixel reads error written by
//! pixels visited before it, so the work buffer has exactly one writer at a
//! time and is owned by the pass that created it.

use ndarray::Array2;
use num_traits::Zero;

use crate::diffusion::kernel::{DiffusionKernel, KernelPreset};
use crate::diffusion::scan::ScanOrder;
use crate::quantize::Quantizer;

/// Result of one diffusion pass
#[derive(Debug, Clone, PartialEq)]
pub struct Diffused<S> {
    /// Quantized samples, one per input sample
    pub output: Array2<S>,
    /// Error mass that fell outside the image and was dropped
    pub discarded: S,
}

/// Kernel-driven error diffusion engine
///
/// Any kernel and any [`Quantizer`] share this one implementation: kernels
/// are data, and scan direction only changes the sign of column offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDiffusion {
    kernel: DiffusionKernel,
    scan: ScanOrder,
}

impl ErrorDiffusion {
    /// Create an engine from a kernel and scan order
    pub const fn new(kernel: DiffusionKernel, scan: ScanOrder) -> Self {
        Self { kernel, scan }
    }

    /// Create an engine for a preset with its conventional scan order
    pub fn from_preset(preset: KernelPreset) -> Self {
        Self::new(preset.kernel(), preset.default_scan())
    }

    /// Replace the scan order
    #[must_use]
    pub fn with_scan(mut self, scan: ScanOrder) -> Self {
        self.scan = scan;
        self
    }

    /// Kernel used by the engine
    pub const fn kernel(&self) -> &DiffusionKernel {
        &self.kernel
    }

    /// Scan order used by the engine
    pub const fn scan(&self) -> ScanOrder {
        self.scan
    }

    /// Run one pass of `quantizer` over `input`
    ///
    /// Each visited pixel is quantized from its working value, and the error
    /// `working - quantized` is spread over the kernel taps. Shares landing
    /// outside the image are accumulated into [`Diffused::discarded`] instead
    /// of being redistributed.
    pub fn run<Q: Quantizer>(
        &self,
        input: &Array2<Q::Sample>,
        quantizer: &Q,
    ) -> Diffused<Q::Sample> {
        let (rows, cols) = input.dim();
        let mut work = input.clone();
        let mut output = Array2::<Q::Sample>::zeros((rows, cols));
        let mut discarded = <Q::Sample as Zero>::zero();
        let divisor = self.kernel.divisor();

        for (row, col, direction) in self.scan.visit(rows, cols) {
            let (Some(&original), Some(&working)) = (input.get([row, col]), work.get([row, col]))
            else {
                continue;
            };

            let quantized = quantizer.quantize(original, working);
            if let Some(cell) = output.get_mut([row, col]) {
                *cell = quantized;
            }

            let error = working - quantized;
            for tap in self.kernel.taps() {
                let share = error * (tap.weight / divisor);
                match direction
                    .target(row, col, tap)
                    .and_then(|index| work.get_mut(index))
                {
                    Some(cell) => *cell += share,
                    None => discarded += share,
                }
            }
        }

        log::debug!(
            "{} pass over {rows}x{cols} ({:?}) complete",
            self.kernel.name(),
            self.scan
        );

        Diffused { output, discarded }
    }
}

impl Default for ErrorDiffusion {
    fn default() -> Self {
        Self::from_preset(KernelPreset::FloydSteinberg)
    }
}
