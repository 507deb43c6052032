//! Headerless raw pixel buffers
//!
//! Grayscale images hold one byte per pixel, RGB images three interleaved
//! bytes per pixel. Rows are stored top to bottom without padding, so a file
//! is exactly `width * height * channels` bytes long.

use ndarray::Array2;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::io::error::{HalftoneError, IoContext, Result, invalid_parameter};
use crate::sample::Rgb;

/// Pixel layout of a raw buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// One intensity byte per pixel
    Gray,
    /// Interleaved R, G, B bytes per pixel
    Rgb,
}

impl Channels {
    /// Bytes per pixel
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
        }
    }
}

/// A fixed-size raw image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl RawImage {
    /// Wrap an existing byte buffer
    ///
    /// # Errors
    ///
    /// Returns [`HalftoneError::DimensionMismatch`] if `data` does not hold
    /// exactly `width * height * channels` bytes
    pub fn new(width: usize, height: usize, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(HalftoneError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Read exactly one image worth of bytes from `path`
    ///
    /// Trailing bytes beyond the image are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - The file holds fewer bytes than the image needs
    pub fn read(path: &Path, width: usize, height: usize, channels: Channels) -> Result<Self> {
        let expected = byte_len(width, height, channels)?;
        let file = File::open(path).with_path(path, "open")?;

        let mut data = Vec::with_capacity(expected);
        file.take(expected as u64)
            .read_to_end(&mut data)
            .with_path(path, "read")?;

        if data.len() < expected {
            return Err(HalftoneError::ShortRead {
                path: path.to_path_buf(),
                expected,
                actual: data.len(),
            });
        }

        log::debug!(
            "Read {width}x{height} {channels:?} raw image from '{}'",
            path.display()
        );
        Self::new(width, height, channels, data)
    }

    /// Write the buffer to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        let mut file = File::create(path).with_path(path, "create")?;
        file.write_all(&self.data).with_path(path, "write")?;
        Ok(())
    }

    /// Build a grayscale image from samples, clamping to `[0, 255]` and truncating
    pub fn from_gray(samples: &Array2<f32>) -> Self {
        let (height, width) = samples.dim();
        Self {
            width,
            height,
            channels: Channels::Gray,
            data: samples.iter().map(|&v| v.clamp(0.0, 255.0) as u8).collect(),
        }
    }

    /// Build an RGB image from samples, clamping to `[0, 255]` and truncating
    pub fn from_rgb(samples: &Array2<Rgb>) -> Self {
        let (height, width) = samples.dim();
        Self {
            width,
            height,
            channels: Channels::Rgb,
            data: samples.iter().flat_map(|pixel| pixel.to_bytes()).collect(),
        }
    }

    /// Grayscale samples as a `height x width` grid
    ///
    /// # Errors
    ///
    /// Returns [`HalftoneError::InvalidParameter`] if the image is not grayscale
    pub fn gray_samples(&self) -> Result<Array2<f32>> {
        self.expect_channels(Channels::Gray)?;
        Ok(Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            self.data
                .get(row * self.width + col)
                .copied()
                .map_or(0.0, f32::from)
        }))
    }

    /// RGB samples as a `height x width` grid
    ///
    /// # Errors
    ///
    /// Returns [`HalftoneError::InvalidParameter`] if the image is not RGB
    pub fn rgb_samples(&self) -> Result<Array2<Rgb>> {
        self.expect_channels(Channels::Rgb)?;
        Ok(Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            let start = (row * self.width + col) * 3;
            self.data
                .get(start..start + 3)
                .and_then(|bytes| <[u8; 3]>::try_from(bytes).ok())
                .map_or_else(Rgb::default, Rgb::from_bytes)
        }))
    }

    fn expect_channels(&self, channels: Channels) -> Result<()> {
        if self.channels == channels {
            Ok(())
        } else {
            Err(invalid_parameter(
                "channels",
                &format!("{:?}", self.channels),
                &format!("expected a {channels:?} image"),
            ))
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Pixel layout
    pub const fn channels(&self) -> Channels {
        self.channels
    }

    /// Raw bytes in file order
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Byte length of a `width x height` image
///
/// # Errors
///
/// Returns [`HalftoneError::InvalidParameter`] if the length overflows `usize`
pub fn byte_len(width: usize, height: usize, channels: Channels) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(channels.count()))
        .ok_or_else(|| {
            invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &"image size overflows the address space",
            )
        })
}
