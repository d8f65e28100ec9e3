//! Original and working image storage.

use crate::error::{EditError, EditResult};
use crate::grid::Grid;

/// Holds the pristine grid supplied at load time and the live working grid.
#[derive(Debug, Clone)]
pub struct ImageStore {
    original: Grid,
    current: Grid,
}

impl ImageStore {
    /// Store `grid` as the original and a copy of it as the working grid.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidImage`] if the grid has no samples.
    pub fn initialize(grid: Grid) -> EditResult<Self> {
        if grid.samples().is_empty() {
            return Err(EditError::InvalidImage("grid must not be empty".to_string()));
        }
        Ok(Self {
            current: grid.clone(),
            original: grid,
        })
    }

    /// The working grid.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The grid as it was at load time.
    pub fn original(&self) -> &Grid {
        &self.original
    }

    /// Swap in a new working grid. The shape may differ from the old one.
    pub fn replace_current(&mut self, grid: Grid) {
        self.current = grid;
    }

    /// Restore the working grid to a copy of the original.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }
}
