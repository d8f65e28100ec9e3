//! Error types for the transformation engine.

use thiserror::Error;

/// Error types for loading images and invoking operations.
///
/// Every variant is recoverable: the engine state is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The supplied grid is empty, non-rectangular, or has out-of-range samples.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// The requested operation name is not in the catalog.
    #[error("Unknown operation: {0:?}")]
    UnknownOperation(String),

    /// Undo was requested before any snapshot was recorded.
    #[error("No history available to undo")]
    NoHistory,

    /// Scale 50% was requested on a grid that cannot get any smaller.
    #[error("Cannot scale a {rows}x{cols} image any smaller")]
    SizeLimit { rows: usize, cols: usize },
}

/// Result type for engine operations.
pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_error_display() {
        let err = EditError::UnknownOperation(String::new());
        assert_eq!(err.to_string(), "Unknown operation: \"\"");

        let err = EditError::SizeLimit { rows: 1, cols: 8 };
        assert_eq!(err.to_string(), "Cannot scale a 1x8 image any smaller");

        let err = EditError::InvalidImage("empty grid".to_string());
        assert_eq!(err.to_string(), "Invalid image: empty grid");
    }
}
