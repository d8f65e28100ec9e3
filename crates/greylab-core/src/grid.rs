//! The grayscale sample grid.
//!
//! A [`Grid`] is a rectangular, row-major array of 8-bit intensity samples.
//! Storing samples as `u8` keeps every value inside `[0, 255]` by
//! construction; host data arriving as wider integers is range-checked in
//! [`Grid::from_rows`].
//!
//! # Coordinate System
//!
//! - Samples are addressed as `(row, col)`
//! - Row 0 is the top of the image, column 0 is the left edge
//!
//! Grids are never resized in place. Every transformation produces a fresh
//! grid, so cloning a grid always yields a fully independent copy.

use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

use crate::error::{EditError, EditResult};

/// A rectangular grid of grayscale intensity samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major samples. Length is always `rows * cols`.
    samples: Vec<u8>,
}

/// Unvalidated wire form used when deserializing.
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    samples: Vec<u8>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = EditError;

    fn try_from(raw: RawGrid) -> EditResult<Self> {
        Grid::new(raw.rows, raw.cols, raw.samples)
    }
}

impl Grid {
    /// Create a grid from dimensions and row-major sample data.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidImage`] if either dimension is zero,
    /// `rows * cols` overflows, or the sample buffer length is not
    /// `rows * cols`.
    pub fn new(rows: usize, cols: usize, samples: Vec<u8>) -> EditResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(EditError::InvalidImage(format!(
                "grid must not be empty (got {}x{})",
                rows, cols
            )));
        }
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            EditError::InvalidImage(format!("{}x{} grid is too large", rows, cols))
        })?;
        if samples.len() != expected {
            return Err(EditError::InvalidImage(format!(
                "expected {} samples for a {}x{} grid, got {}",
                expected,
                rows,
                cols,
                samples.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            samples,
        })
    }

    /// Create a grid from host-supplied integer rows.
    ///
    /// Every row must have the same length as row 0 and every sample must
    /// lie in `[0, 255]`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidImage`] for an empty grid, a ragged grid,
    /// or an out-of-range sample.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> EditResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(EditError::InvalidImage("grid must not be empty".to_string()));
        }

        let mut samples = Vec::with_capacity(height * width);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(EditError::InvalidImage(format!(
                    "row {} has length {}, expected {}",
                    row_idx,
                    row.len(),
                    width
                )));
            }
            for (col_idx, &value) in row.iter().enumerate() {
                let sample = u8::try_from(value).map_err(|_| {
                    EditError::InvalidImage(format!(
                        "sample {} at ({}, {}) is outside 0-255",
                        value, row_idx, col_idx
                    ))
                })?;
                samples.push(sample);
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            samples,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every position.
    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut samples = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                samples.push(f(row, col));
            }
        }
        Self {
            rows,
            cols,
            samples,
        }
    }

    /// Create a grid from an already-decoded 8-bit grayscale buffer.
    pub fn from_gray_image(img: &GrayImage) -> EditResult<Self> {
        let (width, height) = img.dimensions();
        let too_large =
            || EditError::InvalidImage(format!("{}x{} image is too large", height, width));
        let rows = usize::try_from(height).map_err(|_| too_large())?;
        let cols = usize::try_from(width).map_err(|_| too_large())?;
        Self::new(rows, cols, img.as_raw().clone())
    }

    /// Convert to an `image::GrayImage` for hosts that render with the image crate.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidImage`] if either dimension exceeds `u32::MAX`,
    /// the largest size an `image` buffer can describe.
    pub fn to_gray_image(&self) -> EditResult<GrayImage> {
        let too_large = || {
            EditError::InvalidImage(format!(
                "{}x{} grid exceeds image buffer limits",
                self.rows, self.cols
            ))
        };
        let width = u32::try_from(self.cols).map_err(|_| too_large())?;
        let height = u32::try_from(self.rows).map_err(|_| too_large())?;
        // Both indices fit in usize since they came from usize dimensions
        Ok(GrayImage::from_fn(width, height, |x, y| {
            Luma([self.get(y as usize, x as usize)])
        }))
    }

    /// Copy the samples out as integer rows, the inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.samples
            .chunks(self.cols)
            .map(|row| row.iter().map(|&v| i32::from(v)).collect())
            .collect()
    }

    /// Number of rows (image height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (image width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major sample data.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the grid and return its row-major sample data.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Sample at `(row, col)`.
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.samples[row * self.cols + col]
    }

    /// A single row of samples.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.samples[start..start + self.cols]
    }

    /// Apply `f` to every sample, keeping the shape.
    pub(crate) fn map(&self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            samples: self.samples.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Render a text preview: ` .` for a zero sample, ` O` for anything else.
    ///
    /// Handy for eyeballing sparse test patterns.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols * 2 + 1));
        for row in self.samples.chunks(self.cols) {
            for &v in row {
                out.push_str(if v == 0 { " ." } else { " O" });
            }
            out.push('\n');
        }
        out
    }
}
