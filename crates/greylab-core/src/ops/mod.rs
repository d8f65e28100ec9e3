//! The operation catalog.
//!
//! Every edit the engine can perform is an [`Operation`]. Nine of them are
//! pixel transforms that map one [`Grid`] to a new one; the remaining two,
//! [`Operation::Undo`] and [`Operation::Reset`], act on the engine's history
//! and store instead.
//!
//! # Catalog Order
//!
//! The catalog is fixed and always listed in this order:
//! Darken, Brighten, Invert, Flip X, Flip Y, Rotate, Scale 50%, Mirror, Blur,
//! Undo, Reset.
//!
//! # Shape Changes
//!
//! - Rotate swaps rows and columns
//! - Scale 50% halves both dimensions
//! - Mirror doubles the column count

mod blur;
mod geometry;
mod intensity;

use std::fmt;
use std::str::FromStr;

use crate::error::{EditError, EditResult};
use crate::grid::Grid;

pub use blur::blur;
pub use geometry::{flip_x, flip_y, mirror, rotate, scale50};
pub use intensity::{
    brighten, darken, invert, BRIGHTEN_CEILING, DARKEN_FLOOR, INTENSITY_STEP,
};

/// A pixel transform bound to a catalog entry.
pub type TransformFn = fn(&Grid) -> EditResult<Grid>;

/// One entry of the fixed operation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Darken,
    Brighten,
    Invert,
    /// Reverse the row order (top to bottom).
    FlipX,
    /// Reverse each row (left to right).
    FlipY,
    /// Quarter turn clockwise.
    Rotate,
    /// Keep odd rows and columns, halving both dimensions.
    Scale50,
    /// Append a left-right flipped copy, doubling the width.
    Mirror,
    /// 3x3 box average; edges and corners use only in-bounds neighbors.
    Blur,
    Undo,
    Reset,
}

impl Operation {
    /// Every operation in catalog order.
    pub const ALL: [Operation; 11] = [
        Operation::Darken,
        Operation::Brighten,
        Operation::Invert,
        Operation::FlipX,
        Operation::FlipY,
        Operation::Rotate,
        Operation::Scale50,
        Operation::Mirror,
        Operation::Blur,
        Operation::Undo,
        Operation::Reset,
    ];

    /// The display name hosts use to invoke this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Darken => "Darken",
            Operation::Brighten => "Brighten",
            Operation::Invert => "Invert",
            Operation::FlipX => "Flip X",
            Operation::FlipY => "Flip Y",
            Operation::Rotate => "Rotate",
            Operation::Scale50 => "Scale 50%",
            Operation::Mirror => "Mirror",
            Operation::Blur => "Blur",
            Operation::Undo => "Undo",
            Operation::Reset => "Reset",
        }
    }

    /// Names of every operation in catalog order.
    pub fn names() -> [&'static str; 11] {
        Self::ALL.map(Operation::name)
    }

    /// Look up an operation by its exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// The pixel transform for this operation, or `None` for Undo and Reset.
    pub fn transform(self) -> Option<TransformFn> {
        let f: TransformFn = match self {
            Operation::Darken => |g| Ok(darken(g)),
            Operation::Brighten => |g| Ok(brighten(g)),
            Operation::Invert => |g| Ok(invert(g)),
            Operation::FlipX => |g| Ok(flip_x(g)),
            Operation::FlipY => |g| Ok(flip_y(g)),
            Operation::Rotate => |g| Ok(rotate(g)),
            Operation::Scale50 => scale50,
            Operation::Mirror => |g| Ok(mirror(g)),
            Operation::Blur => |g| Ok(blur(g)),
            Operation::Undo | Operation::Reset => return None,
        };
        Some(f)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EditError;

    fn from_str(s: &str) -> EditResult<Self> {
        Self::from_name(s).ok_or_else(|| EditError::UnknownOperation(s.to_string()))
    }
}
