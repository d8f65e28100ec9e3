//! Per-sample intensity operations: darken, brighten, invert.
//!
//! Darken and brighten move samples by a fixed step but leave values near
//! the ends of the range alone, so they never wrap around.

use crate::grid::Grid;

/// Amount added or removed by a single brighten or darken.
pub const INTENSITY_STEP: u8 = 10;

/// Darken only touches samples strictly above this value (and below 255).
pub const DARKEN_FLOOR: u8 = 10;

/// Brighten only touches samples strictly below this value (and above 0).
pub const BRIGHTEN_CEILING: u8 = 245;

/// Subtract [`INTENSITY_STEP`] from every sample in `(10, 255)`.
///
/// Samples at or below 10 and samples at exactly 255 are unchanged.
pub fn darken(grid: &Grid) -> Grid {
    grid.map(|v| {
        if v > DARKEN_FLOOR && v < u8::MAX {
            v - INTENSITY_STEP
        } else {
            v
        }
    })
}

/// Add [`INTENSITY_STEP`] to every sample in `(0, 245)`.
///
/// Pure black stays black and nothing is pushed past 255.
pub fn brighten(grid: &Grid) -> Grid {
    grid.map(|v| {
        if v > 0 && v < BRIGHTEN_CEILING {
            v + INTENSITY_STEP
        } else {
            v
        }
    })
}

/// Replace every sample `v` with `255 - v`.
#[inline]
pub fn invert(grid: &Grid) -> Grid {
    grid.map(|v| u8::MAX - v)
}
