//! Minimum brightness variation quantization (MBVQ)
//!
//! The RGB cube is split into six tetrahedral quadrants, each spanned by four
//! of the eight cube corners. The undiffused input color picks the quadrant,
//! so the choice stays stable while error accumulates. The working color then
//! picks the nearest of the quadrant's four vertices.

use crate::io::configuration::MAX_LEVEL;
use crate::quantize::Quantizer;
use crate::sample::{Rgb, Vertex};

/// One of the six MBVQ quadrants, named by its vertices in search order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Cyan, magenta, yellow, white
    Cmyw,
    /// Magenta, yellow, green, cyan
    Mygc,
    /// Red, green, magenta, yellow
    Rgmy,
    /// Black, red, green, blue
    Krgb,
    /// Red, green, blue, magenta
    Rgbm,
    /// Cyan, magenta, green, blue
    Cmgb,
}

impl Quadrant {
    /// Every quadrant
    pub const ALL: [Self; 6] = [
        Self::Cmyw,
        Self::Mygc,
        Self::Rgmy,
        Self::Krgb,
        Self::Rgbm,
        Self::Cmgb,
    ];

    /// Pick the quadrant for an undiffused color
    ///
    /// Decides on `r+g`, `g+b` and `r+g+b` against one and two times the
    /// channel maximum.
    pub fn classify(original: Rgb) -> Self {
        let Rgb { r, g, b } = original;
        let red_green_high = r + g > MAX_LEVEL;
        let green_blue_high = g + b > MAX_LEVEL;
        let total = r + g + b;

        match (red_green_high, green_blue_high) {
            (true, true) if total > 2.0 * MAX_LEVEL => Self::Cmyw,
            (true, true) => Self::Mygc,
            (true, false) => Self::Rgmy,
            (false, false) if total <= MAX_LEVEL => Self::Krgb,
            (false, false) => Self::Rgbm,
            (false, true) => Self::Cmgb,
        }
    }

    /// The four vertices in declared order
    pub const fn vertices(self) -> [Vertex; 4] {
        use Vertex::{Black, Blue, Cyan, Green, Magenta, Red, White, Yellow};

        match self {
            Self::Cmyw => [Cyan, Magenta, Yellow, White],
            Self::Mygc => [Magenta, Yellow, Green, Cyan],
            Self::Rgmy => [Red, Green, Magenta, Yellow],
            Self::Krgb => [Black, Red, Green, Blue],
            Self::Rgbm => [Red, Green, Blue, Magenta],
            Self::Cmgb => [Cyan, Magenta, Green, Blue],
        }
    }

    /// Nearest vertex to `working` by squared distance
    ///
    /// Only a strictly smaller distance replaces the current best, so exact
    /// ties keep the first declared vertex.
    pub fn nearest_vertex(self, working: Rgb) -> Vertex {
        let [first, rest @ ..] = self.vertices();
        let mut best = first;
        let mut best_distance = working.distance_squared(first.rgb());

        for vertex in rest {
            let distance = working.distance_squared(vertex.rgb());
            if distance < best_distance {
                best = vertex;
                best_distance = distance;
            }
        }

        best
    }
}

/// Select the output vertex for a pixel
pub fn select_vertex(original: Rgb, working: Rgb) -> Vertex {
    Quadrant::classify(original).nearest_vertex(working)
}

/// Vertex quantizer for RGB error diffusion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MbvqQuantizer;

impl Quantizer for MbvqQuantizer {
    type Sample = Rgb;

    fn quantize(&self, original: Rgb, working: Rgb) -> Rgb {
        select_vertex(original, working).rgb()
    }
}
