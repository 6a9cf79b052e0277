//! Layout strings: a compact text form of the registry.
//!
//! Eight `/`-separated rows, row 0 first. Each row lists columns 0..7 using
//! `PKQRBN` for the tracked side's pieces, `X` for the opponent marker, `?`
//! for an uncategorized piece and digits `1`-`8` for runs of empty squares.
//! An empty run is always a single digit, so every board has one spelling.

use std::fmt;
use std::str::FromStr;

use crate::category::PieceCategory;
use crate::error::LayoutError;
use crate::position::Position;
use crate::registry::Registry;

/// The layout of an empty board.
pub const EMPTY_LAYOUT: &str = "8/8/8/8/8/8/8/8";

impl FromStr for Registry {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Registry, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut squares = [None; Position::COUNT];

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;
            let mut prev_digit = false;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    if prev_digit {
                        return Err(LayoutError::AdjacentDigits { row });
                    }
                    prev_digit = true;
                    col += digit as usize;
                } else {
                    prev_digit = false;
                    let category = PieceCategory::from_layout_char(c)
                        .ok_or(LayoutError::InvalidPieceChar { character: c })?;
                    if col >= 8 {
                        return Err(LayoutError::BadRowLength {
                            row,
                            length: col + 1,
                        });
                    }
                    squares[row * 8 + col] = Some(category);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(LayoutError::BadRowLength { row, length: col });
            }
        }

        Ok(Registry::from_squares(squares))
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty_count = 0u8;
        for pos in Position::all() {
            if pos.col() == 0 && pos.row() > 0 {
                if empty_count > 0 {
                    write!(f, "{empty_count}")?;
                    empty_count = 0;
                }
                write!(f, "/")?;
            }
            match self.category_at(pos) {
                Some(category) => {
                    if empty_count > 0 {
                        write!(f, "{empty_count}")?;
                        empty_count = 0;
                    }
                    write!(f, "{}", category.layout_char())?;
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            write!(f, "{empty_count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EMPTY_LAYOUT;
    use crate::category::PieceCategory;
    use crate::error::LayoutError;
    use crate::position::Position;
    use crate::registry::Registry;

    fn roundtrip(layout: &str) {
        let registry: Registry = layout.parse().unwrap();
        let output = format!("{registry}");
        assert_eq!(output, layout, "layout roundtrip failed");
        let again: Registry = output.parse().unwrap();
        assert_eq!(registry, again);
    }

    #[test]
    fn roundtrip_empty() {
        roundtrip(EMPTY_LAYOUT);
        let registry: Registry = EMPTY_LAYOUT.parse().unwrap();
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn roundtrip_mixed() {
        roundtrip("RNBQKBNR/PPPPPPPP/8/3X4/8/2?5/XXXXXXXX/XXXXXXXX");
        roundtrip("N7/8/1X6/8/8/8/8/7X");
    }

    #[test]
    fn places_by_row_then_column() {
        let registry: Registry = "8/8/8/8/8/8/4P3/3X1X2".parse().unwrap();
        let at = |r, c| registry.category_at(Position::new(r, c).unwrap());
        assert_eq!(at(6, 4), Some(PieceCategory::Pawn));
        assert_eq!(at(7, 3), Some(PieceCategory::Opponent));
        assert_eq!(at(7, 5), Some(PieceCategory::Opponent));
        assert_eq!(at(7, 4), None);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn matches_incremental_registration() {
        let parsed: Registry = "8/8/8/8/4B3/8/6?1/8".parse().unwrap();
        let mut built = Registry::new();
        built
            .register(Position::new(4, 4).unwrap(), PieceCategory::Bishop)
            .unwrap();
        built
            .register(Position::new(6, 6).unwrap(), PieceCategory::None)
            .unwrap();
        assert_eq!(parsed, built);
    }

    #[test]
    fn error_wrong_row_count() {
        let err = "8/8/8".parse::<Registry>().unwrap_err();
        assert_eq!(err, LayoutError::WrongRowCount { found: 3 });
    }

    #[test]
    fn error_bad_row_length() {
        let err = "8/8/8/8/8/8/8/7".parse::<Registry>().unwrap_err();
        assert_eq!(err, LayoutError::BadRowLength { row: 7, length: 7 });
        let err = "8/8/8/8/8/8/8/8P".parse::<Registry>().unwrap_err();
        assert_eq!(err, LayoutError::BadRowLength { row: 7, length: 9 });
    }

    #[test]
    fn error_adjacent_digits() {
        let err = "44/8/8/8/8/8/8/8".parse::<Registry>().unwrap_err();
        assert_eq!(err, LayoutError::AdjacentDigits { row: 0 });
        let err = "8/8/8/8/8/8/8/P61".parse::<Registry>().unwrap_err();
        assert_eq!(err, LayoutError::AdjacentDigits { row: 7 });
        assert!("8/8/8/8/8/8/8/3X4".parse::<Registry>().is_ok());
    }

    #[test]
    fn error_invalid_piece_char() {
        let err = "8/8/8/8/8/8/8/3Z4".parse::<Registry>().unwrap_err();
        assert_eq!(err, LayoutError::InvalidPieceChar { character: 'Z' });
        let err = "8/8/8/8/8/8/8/09".parse::<Registry>().unwrap_err();
        assert_eq!(err, LayoutError::InvalidPieceChar { character: '0' });
    }
}
