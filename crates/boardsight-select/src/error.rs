//! Setup and highlight errors.

use boardsight_core::{Position, RegistryError};

/// Errors from placing a piece during setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The coordinates do not name a tile on the board.
    #[error("no tile at row {row}, column {col}")]
    InvalidTile {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The registry refused the piece.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// A position could not be mapped to a render target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    /// The tile for this position is missing from the scene.
    #[error("no render target for position {position}")]
    Unresolved {
        /// The position that failed to resolve.
        position: Position,
    },
}
