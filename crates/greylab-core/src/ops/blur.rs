//! 3x3 box blur.
//!
//! Each output sample is the truncated mean of the input samples in its
//! 3x3 neighborhood that fall inside the grid. For a grid of at least 2x2
//! that means interior samples average 9 values, edge samples 6, and the
//! four corners 4. All reads come from the unblurred input.

use crate::grid::Grid;

/// Box-blur the grid, keeping its shape.
pub fn blur(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    Grid::from_fn(rows, cols, |row, col| {
        let row_lo = row.saturating_sub(1);
        let row_hi = (row + 1).min(rows - 1);
        let col_lo = col.saturating_sub(1);
        let col_hi = (col + 1).min(cols - 1);

        let mut sum = 0u32;
        let mut count = 0u32;
        for r in row_lo..=row_hi {
            for &v in &grid.row(r)[col_lo..=col_hi] {
                sum += u32::from(v);
                count += 1;
            }
        }
        // Mean of u8 values always fits in u8
        (sum / count) as u8
    })
}
