//! Text rendering of the board with its highlight overlay.

use std::fmt;

use boardsight_core::{PieceCategory, Position, Registry, SquareList};
use boardsight_select::{Mark, Overlay};

/// Board view: pieces by layout character, `o` on quiet-move squares, `*`
/// on captures, and the selected square in brackets.
pub struct BoardView<'a> {
    pub registry: &'a Registry,
    pub overlay: &'a Overlay,
    pub selected: Option<Position>,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    0  1  2  3  4  5  6  7")?;
        for pos in Position::all() {
            if pos.col() == 0 {
                write!(f, "\n{}  ", pos.row())?;
            }
            let c = match self.overlay.mark_at(pos) {
                Some(Mark::Capture) => '*',
                Some(Mark::Quiet) => 'o',
                None => self.registry.category_at(pos).map_or('.', PieceCategory::layout_char),
            };
            if self.selected == Some(pos) {
                write!(f, "[{c}]")?;
            } else {
                write!(f, " {c} ")?;
            }
        }
        Ok(())
    }
}

/// Format a list of squares as space-separated `row,col` pairs, or `-` when
/// the list is empty.
pub fn format_squares(squares: &SquareList) -> String {
    if squares.is_empty() {
        return "-".to_string();
    }
    squares
        .iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
