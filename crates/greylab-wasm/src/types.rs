//! WASM-compatible wrapper types for grid data.

use greylab_core::Grid;
use wasm_bindgen::prelude::*;

/// A grayscale grid wrapper for JavaScript.
///
/// Samples are one byte each, stored row-major. Calling `pixels()` copies
/// them into a `Uint8Array` on the JavaScript side.
#[wasm_bindgen]
pub struct JsGrid {
    rows: usize,
    cols: usize,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsGrid {
    /// Number of rows (image height)
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (image width)
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of samples (rows * cols)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the samples as a Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsGrid {
    pub(crate) fn from_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            pixels: grid.samples().to_vec(),
        }
    }
}
