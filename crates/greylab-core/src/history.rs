//! Linear undo history.
//!
//! Snapshots are pushed before each mutating operation. Undo pops them back
//! off, except that the oldest snapshot is never removed: once only one
//! entry remains, undo keeps returning a copy of it.

use tracing::trace;

use crate::error::{EditError, EditResult};
use crate::grid::Grid;

/// Ordered stack of prior working-grid snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Grid>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a deep copy of `snapshot`.
    pub fn push(&mut self, snapshot: &Grid) {
        self.snapshots.push(snapshot.clone());
        trace!(depth = self.snapshots.len(), "history push");
    }

    /// Take the most recent snapshot for an undo.
    ///
    /// With more than one entry the last one is removed and returned. With
    /// exactly one entry a copy is returned and the entry stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoHistory`] if the history is empty.
    pub fn pop_or_peek_oldest(&mut self) -> EditResult<Grid> {
        match self.snapshots.len() {
            0 => Err(EditError::NoHistory),
            1 => {
                trace!("history floor reached, keeping oldest snapshot");
                Ok(self.snapshots[0].clone())
            }
            _ => {
                let snapshot = self.snapshots.pop().ok_or(EditError::NoHistory)?;
                trace!(depth = self.snapshots.len(), "history pop");
                Ok(snapshot)
            }
        }
    }

    /// Drop every snapshot. Only called when a new image is loaded.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no snapshots are stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
