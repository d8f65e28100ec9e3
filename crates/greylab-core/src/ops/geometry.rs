//! Geometric operations: flips, rotation, mirroring, and 50% downscaling.
//!
//! All functions read from the input grid and build a new one. Rotation,
//! mirroring, and scaling change the output dimensions.

use tracing::warn;

use crate::error::{EditError, EditResult};
use crate::grid::Grid;

/// Reverse the row order (top becomes bottom). Columns are untouched.
pub fn flip_x(grid: &Grid) -> Grid {
    let rows = grid.rows();
    Grid::from_fn(rows, grid.cols(), |row, col| grid.get(rows - 1 - row, col))
}

/// Reverse the column order within each row (left becomes right).
pub fn flip_y(grid: &Grid) -> Grid {
    let cols = grid.cols();
    Grid::from_fn(grid.rows(), cols, |row, col| grid.get(row, cols - 1 - col))
}

/// Rotate a quarter turn clockwise.
///
/// Input sample `(row, col)` lands at `(col, rows - 1 - row)` in the output,
/// so an `R x C` grid becomes `C x R`.
pub fn rotate(grid: &Grid) -> Grid {
    let rows = grid.rows();
    // Inverse of the forward mapping: out(r, c) = in(rows - 1 - c, r)
    Grid::from_fn(grid.cols(), rows, |row, col| grid.get(rows - 1 - col, row))
}

/// Place the left-right flipped grid to the right of the original.
///
/// Output is `rows x (2 * cols)`; the left half is the input unchanged.
pub fn mirror(grid: &Grid) -> Grid {
    let cols = grid.cols();
    Grid::from_fn(grid.rows(), cols * 2, |row, col| {
        if col < cols {
            grid.get(row, col)
        } else {
            grid.get(row, 2 * cols - 1 - col)
        }
    })
}

/// Halve both dimensions by keeping only odd-indexed rows and columns.
///
/// Sample `(2r + 1, 2c + 1)` of the input becomes `(r, c)` of the output.
/// Even rows and columns are dropped, so the output is
/// `(rows / 2) x (cols / 2)`.
///
/// # Errors
///
/// Returns [`EditError::SizeLimit`] if either dimension is 1 or less.
pub fn scale50(grid: &Grid) -> EditResult<Grid> {
    let (rows, cols) = grid.dimensions();
    if rows <= 1 || cols <= 1 {
        warn!(rows, cols, "image cannot get any smaller");
        return Err(EditError::SizeLimit { rows, cols });
    }
    Ok(Grid::from_fn(rows / 2, cols / 2, |row, col| {
        grid.get(2 * row + 1, 2 * col + 1)
    }))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
