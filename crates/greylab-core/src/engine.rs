//! The transformation engine: command dispatch over the store and history.
//!
//! # Dispatch Rules
//!
//! - Pixel operations snapshot the pre-edit grid onto the history, then
//!   replace the working grid with the result
//! - Undo restores from history and never records a snapshot of its own
//! - Reset restores the original grid without recording a snapshot, so it
//!   cannot itself be undone
//! - A failing call (unknown name, size limit, empty history) changes nothing

use tracing::debug;

use crate::error::EditResult;
use crate::grid::Grid;
use crate::history::History;
use crate::ops::Operation;
use crate::store::ImageStore;

/// Edits a single grayscale image through the operation catalog.
///
/// Callers mutate the engine through `&mut self`, so only one operation can
/// be in flight at a time.
#[derive(Debug, Clone)]
pub struct Engine {
    store: ImageStore,
    history: History,
}

impl Engine {
    /// Create an engine editing `grid`, with an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidImage`] if the grid is empty.
    pub fn new(grid: Grid) -> EditResult<Self> {
        let (rows, cols) = grid.dimensions();
        let store = ImageStore::initialize(grid)?;
        debug!(rows, cols, "image loaded");
        Ok(Self {
            store,
            history: History::new(),
        })
    }

    /// Create an engine from host-supplied integer rows.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidImage`] for empty, ragged, or
    /// out-of-range input.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> EditResult<Self> {
        Self::new(Grid::from_rows(rows)?)
    }

    /// Replace the image being edited and clear the history.
    ///
    /// On failure the engine keeps its previous image and history.
    pub fn load(&mut self, grid: Grid) -> EditResult<()> {
        *self = Self::new(grid)?;
        Ok(())
    }

    /// Replace the image with host-supplied integer rows and clear the history.
    ///
    /// On failure the engine keeps its previous image and history.
    pub fn load_rows(&mut self, rows: Vec<Vec<i32>>) -> EditResult<()> {
        self.load(Grid::from_rows(rows)?)
    }

    /// Names of every operation in catalog order.
    pub fn operation_names() -> [&'static str; 11] {
        Operation::names()
    }

    /// Invoke an operation by its display name.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownOperation`] for a name outside the catalog,
    /// plus any error [`Engine::apply`] can return.
    pub fn invoke(&mut self, name: &str) -> EditResult<()> {
        let op: Operation = name.parse()?;
        self.apply(op)
    }

    /// Apply an operation to the working grid.
    ///
    /// # Errors
    ///
    /// - [`EditError::NoHistory`] for Undo before any snapshot exists
    /// - [`EditError::SizeLimit`] for Scale 50% on a grid that is one row
    ///   or one column wide
    pub fn apply(&mut self, op: Operation) -> EditResult<()> {
        if let Some(transform) = op.transform() {
            // Compute first so a failing transform leaves no stray snapshot
            let next = transform(self.store.current())?;
            self.history.push(self.store.current());
            self.store.replace_current(next);
        } else if op == Operation::Undo {
            let previous = self.history.pop_or_peek_oldest()?;
            self.store.replace_current(previous);
        } else {
            self.store.reset();
        }

        let (rows, cols) = self.store.current().dimensions();
        debug!(
            operation = op.name(),
            rows,
            cols,
            history = self.history.len(),
            "operation applied"
        );
        Ok(())
    }

    /// The working grid as of the most recent successful operation.
    pub fn current(&self) -> &Grid {
        self.store.current()
    }

    /// The grid supplied at load time.
    pub fn original(&self) -> &Grid {
        self.store.original()
    }

    /// Number of snapshots available to undo.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check if Undo would succeed.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}
