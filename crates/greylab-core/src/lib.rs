//! Greylab Core - Grayscale transformation engine
//!
//! This crate edits a single in-memory grayscale image through a fixed
//! catalog of pixel operations, with a linear undo history and a reset to the
//! image as it was loaded.
//!
//! # Module Structure
//!
//! - `grid` - The rectangular sample grid and its conversions
//! - `ops` - The operation catalog and the pixel algorithms behind it
//! - `history` - Undo snapshots
//! - `store` - Original and working image storage
//! - `engine` - Command dispatch tying the pieces together
//!
//! Loading image files and displaying results are left to the host; the
//! engine only ever sees decoded intensity values.

pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod ops;
pub mod store;

pub use engine::Engine;
pub use error::{EditError, EditResult};
pub use grid::Grid;
pub use history::History;
pub use ops::Operation;
pub use store::ImageStore;
