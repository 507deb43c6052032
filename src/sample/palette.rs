//! The eight pure colors MBVQ halftoning is allowed to emit

use crate::sample::Rgb;

/// A corner of the RGB cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    /// (255, 255, 255)
    White,
    /// (0, 0, 0)
    Black,
    /// (0, 255, 255)
    Cyan,
    /// (255, 0, 255)
    Magenta,
    /// (255, 255, 0)
    Yellow,
    /// (255, 0, 0)
    Red,
    /// (0, 255, 0)
    Green,
    /// (0, 0, 255)
    Blue,
}

impl Vertex {
    /// Every palette entry
    pub const ALL: [Self; 8] = [
        Self::White,
        Self::Black,
        Self::Cyan,
        Self::Magenta,
        Self::Yellow,
        Self::Red,
        Self::Green,
        Self::Blue,
    ];

    /// The vertex as 8-bit channels
    pub const fn bytes(self) -> [u8; 3] {
        match self {
            Self::White => [255, 255, 255],
            Self::Black => [0, 0, 0],
            Self::Cyan => [0, 255, 255],
            Self::Magenta => [255, 0, 255],
            Self::Yellow => [255, 255, 0],
            Self::Red => [255, 0, 0],
            Self::Green => [0, 255, 0],
            Self::Blue => [0, 0, 255],
        }
    }

    /// The vertex as a floating-point sample
    pub fn rgb(self) -> Rgb {
        Rgb::from_bytes(self.bytes())
    }

    /// Look up the palette entry whose channels equal `sample` exactly
    pub fn from_rgb(sample: Rgb) -> Option<Self> {
        Self::ALL.into_iter().find(|vertex| vertex.rgb() == sample)
    }
}
