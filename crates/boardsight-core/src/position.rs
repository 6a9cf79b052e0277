//! Board positions as (row, column) pairs on the fixed 8x8 grid.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Return `true` if both coordinates lie within `0..BOARD_SIZE`.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// A square on the board, addressed by row and column.
///
/// A `Position` can only be built through a bounds-checked constructor, so
/// every value is on the board. Index = row * 8 + col, so (0,0) = 0 and
/// (7,7) = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// Total number of positions.
    pub const COUNT: usize = 64;

    /// Create a position, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Position> {
        if in_bounds(row, col) {
            Some(Position(row as u8 * 8 + col as u8))
        } else {
            None
        }
    }

    /// Create a position from wide integers, as handed over by raw input.
    pub fn from_raw(row: i32, col: i32) -> Option<Position> {
        let row = i8::try_from(row).ok()?;
        let col = i8::try_from(col).ok()?;
        Position::new(row, col)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Step by `(d_row, d_col)`, returning `None` when the target leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Position> {
        Position::new(self.row() + d_row, self.col() + d_col)
    }

    /// Parse a `row,col` pair such as `3,4`.
    pub fn parse(s: &str) -> Option<Position> {
        let (row, col) = s.split_once(',')?;
        let row: i32 = row.trim().parse().ok()?;
        let col: i32 = col.trim().parse().ok()?;
        Position::from_raw(row, col)
    }

    /// Iterate over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..64).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row(), self.col())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, in_bounds};

    #[test]
    fn new_and_accessors() {
        let pos = Position::new(3, 5).unwrap();
        assert_eq!(pos.row(), 3);
        assert_eq!(pos.col(), 5);
        assert_eq!(pos.index(), 29);
    }

    #[test]
    fn bounds() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(7, 7));
        assert!(!in_bounds(-1, 0));
        assert!(!in_bounds(0, 8));
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, -1).is_none());
        assert!(Position::from_raw(300, 0).is_none());
    }

    #[test]
    fn row_col_roundtrip() {
        for pos in Position::all() {
            assert_eq!(Position::new(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::all().count(), Position::COUNT);
    }

    #[test]
    fn offset_leaves_board() {
        let corner = Position::new(7, 0).unwrap();
        assert_eq!(corner.offset(-1, 1), Position::new(6, 1));
        assert!(corner.offset(1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());
    }

    #[test]
    fn parse_and_display() {
        let pos = Position::parse("6,4").unwrap();
        assert_eq!(pos, Position::new(6, 4).unwrap());
        assert_eq!(format!("{pos}"), "6,4");
        assert_eq!(format!("{pos:?}"), "Position(6,4)");
        assert!(Position::parse("8,0").is_none());
        assert!(Position::parse("3").is_none());
        assert!(Position::parse("a,b").is_none());
    }
}
