//! Error types for registry setup and layout parsing.

use crate::category::PieceCategory;
use crate::position::Position;

/// Errors from populating the occupancy registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The square already holds a piece. The existing entry is kept.
    #[error("position {position} is already occupied by {existing}")]
    DuplicatePosition {
        /// The square that was registered twice.
        position: Position,
        /// The category already stored there.
        existing: PieceCategory,
    },
}

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in layout, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// Two empty-run digits follow each other, so the row has no single
    /// spelling.
    #[error("row {row} splits an empty run across adjacent digits")]
    AdjacentDigits {
        /// Zero-based row index.
        row: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::{LayoutError, RegistryError};
    use crate::category::PieceCategory;
    use crate::position::Position;

    #[test]
    fn duplicate_display() {
        let err = RegistryError::DuplicatePosition {
            position: Position::new(2, 1).unwrap(),
            existing: PieceCategory::Opponent,
        };
        assert_eq!(format!("{err}"), "position 2,1 is already occupied by opponent");
    }

    #[test]
    fn layout_error_display() {
        let err = LayoutError::BadRowLength { row: 3, length: 9 };
        assert_eq!(format!("{err}"), "row 3 describes 9 squares, expected 8");
        let err = LayoutError::WrongRowCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 rows in layout, found 7");
        let err = LayoutError::AdjacentDigits { row: 0 };
        assert_eq!(format!("{err}"), "row 0 splits an empty run across adjacent digits");
    }
}
