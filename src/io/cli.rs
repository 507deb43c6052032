//! Command-line interface for halftoning one raw image with several methods

use crate::diffusion::{DiffusionKernel, ErrorDiffusion, KernelPreset, ScanOrder, SeparableDiffusion};
use crate::io::configuration::{
    DEFAULT_BAYER_SIZES, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_THRESHOLD, DEFAULT_WIDTH,
    PREVIEW_EXTENSION, RAW_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::io::raw::{Channels, RawImage};
use crate::ordered::bayer::validate_size;
use crate::ordered::{OrderedDither, RandomThreshold, fixed_threshold};
use crate::quantize::{MbvqQuantizer, OutputLevels, ScalarQuantizer};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "halftone")]
#[command(
    author,
    version,
    about = "Halftone raw grayscale and RGB images with error diffusion and ordered dithering"
)]
/// Command-line arguments for the halftoning tool
// One flag per independent output option
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Headerless raw input image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Treat the input as interleaved RGB instead of grayscale
    #[arg(short, long)]
    pub color: bool,

    /// Halftoning methods to run (defaults to every method of the image mode)
    #[arg(short, long = "method", value_enum)]
    pub methods: Vec<Method>,

    /// Bayer matrix sizes for the `bayer` method
    #[arg(short = 'n', long = "bayer-size", default_values_t = DEFAULT_BAYER_SIZES)]
    pub bayer_sizes: Vec<usize>,

    /// Threshold for scalar quantization
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f32,

    /// Seed for random thresholding
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Override the scan order of error diffusion methods
    #[arg(long, value_enum)]
    pub scan: Option<ScanArg>,

    /// Directory for outputs (defaults to the input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write a PNG preview next to every raw output
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Halftoning method selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Global threshold
    Fixed,
    /// Seeded uniform random threshold per pixel
    Random,
    /// Ordered dithering with Bayer matrices
    Bayer,
    /// Floyd-Steinberg error diffusion
    FloydSteinberg,
    /// Jarvis-Judice-Ninke error diffusion
    Jjn,
    /// Stucki error diffusion
    Stucki,
    /// Per-channel CMY error diffusion
    Separable,
    /// MBVQ vertex error diffusion
    Mbvq,
}

impl Method {
    /// Methods for grayscale images
    pub const GRAY: [Self; 6] = [
        Self::Fixed,
        Self::Random,
        Self::Bayer,
        Self::FloydSteinberg,
        Self::Jjn,
        Self::Stucki,
    ];

    /// Methods for RGB images
    pub const COLOR: [Self; 2] = [Self::Separable, Self::Mbvq];

    /// Whether the method consumes RGB input
    pub const fn is_color(self) -> bool {
        matches!(self, Self::Separable | Self::Mbvq)
    }

    /// Output file name suffix
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Random => "random",
            Self::Bayer => "bayer",
            Self::FloydSteinberg => "fs",
            Self::Jjn => "jjn",
            Self::Stucki => "stucki",
            Self::Separable => "separable",
            Self::Mbvq => "mbvq",
        }
    }

    /// Diffusion kernel preset for grayscale diffusion methods
    pub const fn preset(self) -> Option<KernelPreset> {
        match self {
            Self::FloydSteinberg => Some(KernelPreset::FloydSteinberg),
            Self::Jjn => Some(KernelPreset::JarvisJudiceNinke),
            Self::Stucki => Some(KernelPreset::Stucki),
            Self::Fixed | Self::Random | Self::Bayer | Self::Separable | Self::Mbvq => None,
        }
    }
}

/// Scan order accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanArg {
    /// Every row left-to-right
    Raster,
    /// Alternate row direction
    Serpentine,
}

impl From<ScanArg> for ScanOrder {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::Raster => Self::Raster,
            ScanArg::Serpentine => Self::Serpentine,
        }
    }
}

/// One output to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    /// Method to run
    pub method: Method,
    /// Matrix size for Bayer jobs
    pub bayer_size: Option<usize>,
}

impl Job {
    /// Name used in file names and progress messages
    pub fn name(&self) -> String {
        match self.bayer_size {
            Some(size) => format!("{}{size}", self.method.suffix()),
            None => self.method.suffix().to_string(),
        }
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pixel layout implied by `--color`
    pub const fn channels(&self) -> Channels {
        if self.color { Channels::Rgb } else { Channels::Gray }
    }

    /// Expand the selected methods into jobs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A method does not match the image mode
    /// - A Bayer size is not a supported power of two
    /// - The threshold is not finite
    pub fn jobs(&self) -> Result<Vec<Job>> {
        if !self.threshold.is_finite() {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"must be a finite number",
            ));
        }

        let methods: Vec<Method> = if self.methods.is_empty() {
            if self.color {
                Method::COLOR.to_vec()
            } else {
                Method::GRAY.to_vec()
            }
        } else {
            self.methods.clone()
        };

        let mut jobs = Vec::new();
        for method in methods {
            if method.is_color() != self.color {
                let mode = if self.color { "an RGB" } else { "a grayscale" };
                return Err(invalid_parameter(
                    "method",
                    &method.suffix(),
                    &format!("cannot be applied to {mode} image"),
                ));
            }

            if method == Method::Bayer {
                for &size in &self.bayer_sizes {
                    validate_size(size)?;
                    jobs.push(Job {
                        method,
                        bayer_size: Some(size),
                    });
                }
            } else {
                jobs.push(Job {
                    method,
                    bayer_size: None,
                });
            }
        }

        Ok(jobs)
    }
}

/// Runs every requested job on one raw image and writes the outputs
pub struct HalftoneProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl HalftoneProcessor {
    /// Create a processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Read the input, run all jobs and write one file per job
    ///
    /// Returns the paths of the raw outputs in job order.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, reading the input, or
    /// writing any output fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let jobs = self.cli.jobs()?;
        let image = RawImage::read(
            &self.cli.input,
            self.cli.width,
            self.cli.height,
            self.cli.channels(),
        )?;

        if self.cli.scan.is_some()
            && !jobs
                .iter()
                .any(|job| job.method.preset().is_some() || job.method.is_color())
        {
            log::warn!("--scan has no effect without an error diffusion method");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut written = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let name = job.name();
            if let Some(ref pm) = self.progress_manager {
                pm.start_job(&name);
            }

            let output = self.run_job(job, &image)?;
            let path = self.output_path(job);
            output.write(&path)?;
            log::info!("Wrote {} output to '{}'", name, path.display());

            if self.cli.png {
                let preview = path.with_extension(PREVIEW_EXTENSION);
                export_png(&output, &preview)?;
                log::info!("Wrote {} preview to '{}'", name, preview.display());
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_job(&name);
            }
            written.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Produce the output image of a single job
    ///
    /// # Errors
    ///
    /// Returns an error if the image mode does not match the job or a Bayer
    /// size is invalid
    pub fn run_job(&self, job: &Job, image: &RawImage) -> Result<RawImage> {
        let quantizer = ScalarQuantizer::new(self.cli.threshold, OutputLevels::BINARY_8BIT);
        let scan = self.cli.scan.map(ScanOrder::from);

        let output = match job.method {
            Method::Fixed => RawImage::from_gray(&fixed_threshold(&image.gray_samples()?, &quantizer)),
            Method::Random => RawImage::from_gray(
                &RandomThreshold::new(self.cli.seed)
                    .apply(&image.gray_samples()?, OutputLevels::BINARY_8BIT),
            ),
            Method::Bayer => {
                let size = job.bayer_size.unwrap_or(DEFAULT_BAYER_SIZES[0]);
                RawImage::from_gray(&OrderedDither::bayer(size)?.apply(&image.gray_samples()?))
            }
            Method::FloydSteinberg | Method::Jjn | Method::Stucki => {
                let preset = job.method.preset().unwrap_or(KernelPreset::FloydSteinberg);
                let mut engine = ErrorDiffusion::from_preset(preset);
                if let Some(scan) = scan {
                    engine = engine.with_scan(scan);
                }
                let pass = engine.run(&image.gray_samples()?, &quantizer);
                log::debug!("{} discarded {:.3} error mass", job.name(), pass.discarded);
                RawImage::from_gray(&pass.output)
            }
            Method::Separable => {
                let engine = ErrorDiffusion::new(
                    DiffusionKernel::floyd_steinberg(),
                    scan.unwrap_or(ScanOrder::Raster),
                );
                let pass = SeparableDiffusion::new(engine, quantizer).run(&image.rgb_samples()?);
                log::debug!("{} discarded {:?} error mass", job.name(), pass.discarded);
                RawImage::from_rgb(&pass.output)
            }
            Method::Mbvq => {
                let engine = ErrorDiffusion::new(
                    DiffusionKernel::floyd_steinberg(),
                    scan.unwrap_or(ScanOrder::Raster),
                );
                let pass = engine.run(&image.rgb_samples()?, &MbvqQuantizer);
                log::debug!("{} discarded {:?} error mass", job.name(), pass.discarded);
                RawImage::from_rgb(&pass.output)
            }
        };

        Ok(output)
    }

    /// Output path of a job's raw file
    pub fn output_path(&self, job: &Job) -> PathBuf {
        let stem = self.cli.input.file_stem().unwrap_or_default();
        let file_name = format!("{}_{}.{RAW_EXTENSION}", stem.to_string_lossy(), job.name());

        match (&self.cli.output_dir, self.cli.input.parent()) {
            (Some(dir), _) => dir.join(file_name),
            (None, Some(parent)) => parent.join(file_name),
            (None, None) => PathBuf::from(file_name),
        }
    }

    /// Input path being processed
    pub fn input(&self) -> &Path {
        &self.cli.input
    }
}
