//! Highlight collaborators.

use boardsight_core::Position;

use crate::geometry::Tile;

/// How a highlighted tile is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The selected piece can move here.
    Quiet,
    /// The selected piece can capture here.
    Capture,
}

/// Something that draws move highlights on resolved tiles.
pub trait Highlighter {
    /// Remove every highlight.
    fn clear_highlights(&mut self);

    /// Draw a quiet-move marker on `tile`.
    fn show_quiet_move(&mut self, tile: Tile);

    /// Draw a capture marker on `tile`.
    fn show_capture(&mut self, tile: Tile);
}

/// In-memory highlight layer: one optional mark per square.
#[derive(Debug, Clone)]
pub struct Overlay {
    marks: [Option<Mark>; Position::COUNT],
}

impl Overlay {
    pub const fn new() -> Overlay {
        Overlay {
            marks: [None; Position::COUNT],
        }
    }

    /// Return the mark drawn on `position`, if any.
    #[inline]
    pub fn mark_at(&self, position: Position) -> Option<Mark> {
        self.marks[position.index()]
    }

    /// Iterate over marked squares in row-major order.
    pub fn marked(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        Position::all().filter_map(|pos| self.mark_at(pos).map(|mark| (pos, mark)))
    }

    /// Return `true` if nothing is highlighted.
    pub fn is_clear(&self) -> bool {
        self.marks.iter().all(Option::is_none)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for Overlay {
    fn clear_highlights(&mut self) {
        self.marks = [None; Position::COUNT];
    }

    fn show_quiet_move(&mut self, tile: Tile) {
        self.marks[tile.position.index()] = Some(Mark::Quiet);
    }

    fn show_capture(&mut self, tile: Tile) {
        self.marks[tile.position.index()] = Some(Mark::Capture);
    }
}
