//! Row traversal policies and the scan-direction coordinate transform

use crate::diffusion::kernel::KernelTap;

/// How rows are traversed during a diffusion pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanOrder {
    /// Every row left-to-right
    #[default]
    Raster,
    /// Even rows left-to-right, odd rows right-to-left
    Serpentine,
}

/// Horizontal direction of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// Increasing column index
    LeftToRight,
    /// Decreasing column index
    RightToLeft,
}

impl ScanOrder {
    /// Direction of `row` (0-indexed)
    pub const fn direction(self, row: usize) -> ScanDirection {
        match self {
            Self::Serpentine if row % 2 == 1 => ScanDirection::RightToLeft,
            Self::Raster | Self::Serpentine => ScanDirection::LeftToRight,
        }
    }

    /// Every `(row, col, direction)` of a `rows` x `cols` image in visiting order
    pub fn visit(
        self,
        rows: usize,
        cols: usize,
    ) -> impl Iterator<Item = (usize, usize, ScanDirection)> {
        (0..rows).flat_map(move |row| {
            let direction = self.direction(row);
            (0..cols).map(move |step| (row, direction.column(step, cols), direction))
        })
    }
}

impl ScanDirection {
    /// Column visited at position `step` of a row `cols` wide
    pub const fn column(self, step: usize, cols: usize) -> usize {
        match self {
            Self::LeftToRight => step,
            Self::RightToLeft => cols - 1 - step,
        }
    }

    /// Column offset of a kernel tap as seen in this direction
    ///
    /// Right-to-left rows negate the offset; row offsets never change.
    pub const fn mirror(self, col_offset: isize) -> isize {
        match self {
            Self::LeftToRight => col_offset,
            Self::RightToLeft => -col_offset,
        }
    }

    /// Grid position receiving `tap`'s share from the pixel at `(row, col)`
    ///
    /// Returns `None` when the position would be negative. Positions past
    /// the far edges are left to the caller's bounds check.
    pub const fn target(self, row: usize, col: usize, tap: &KernelTap) -> Option<[usize; 2]> {
        match (
            row.checked_add_signed(tap.row),
            col.checked_add_signed(self.mirror(tap.col)),
        ) {
            (Some(r), Some(c)) => Some([r, c]),
            _ => None,
        }
    }
}
