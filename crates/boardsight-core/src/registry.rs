//! The occupancy registry: which squares hold a piece, and of what category.

use std::fmt;

use tracing::debug;

use crate::category::PieceCategory;
use crate::error::RegistryError;
use crate::position::Position;
use crate::side::Side;

/// How a target square looks to a moving piece of the tracked side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Nothing is registered on the square.
    Empty,
    /// The square holds the opponent marker and can be captured.
    Opponent,
    /// The square holds any other piece and cannot be entered.
    Blocked,
}

/// Occupancy of the 8x8 board.
///
/// Filled once during setup, one [`register`](Registry::register) per piece,
/// and read-only afterwards. Keys are write-once: there is no removal or
/// update.
#[derive(Clone, PartialEq, Eq)]
pub struct Registry {
    /// Category per square, indexed by [`Position::index()`].
    squares: [Option<PieceCategory>; Position::COUNT],
    /// Number of occupied squares.
    len: u8,
}

impl Registry {
    /// Create an empty registry.
    pub const fn new() -> Registry {
        Registry {
            squares: [None; Position::COUNT],
            len: 0,
        }
    }

    /// Construct a registry from a filled square array. Used by layout parsing.
    pub(crate) fn from_squares(squares: [Option<PieceCategory>; Position::COUNT]) -> Registry {
        let len = squares.iter().filter(|sq| sq.is_some()).count() as u8;
        Registry { squares, len }
    }

    /// Register `category` on `position`.
    ///
    /// Fails with [`RegistryError::DuplicatePosition`] if the square is
    /// already registered; the stored entry is left untouched.
    pub fn register(
        &mut self,
        position: Position,
        category: PieceCategory,
    ) -> Result<(), RegistryError> {
        let slot = &mut self.squares[position.index()];
        if let Some(existing) = *slot {
            return Err(RegistryError::DuplicatePosition { position, existing });
        }
        *slot = Some(category);
        self.len += 1;
        debug!(%position, %category, "registered piece");
        Ok(())
    }

    /// Return the category on `position`, or `None` if the square is empty.
    #[inline]
    pub fn category_at(&self, position: Position) -> Option<PieceCategory> {
        self.squares[position.index()]
    }

    /// Return `true` if nothing is registered on `position`.
    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.category_at(position).is_none()
    }

    /// Return `true` if `position` holds the opponent marker.
    #[inline]
    pub fn is_opponent(&self, position: Position) -> bool {
        self.category_at(position)
            .is_some_and(PieceCategory::is_opponent)
    }

    /// Classify `position` as a move target. Only pieces of the opposing
    /// side are capturable; sideless pieces block like own pieces.
    #[inline]
    pub fn classify(&self, position: Position) -> Target {
        match self.category_at(position).map(PieceCategory::side) {
            None => Target::Empty,
            Some(Some(Side::Opponent)) => Target::Opponent,
            Some(Some(Side::Own) | None) => Target::Blocked,
        }
    }

    /// Return the number of occupied squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Iterate over occupied squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, PieceCategory)> + '_ {
        Position::all().filter_map(|pos| self.category_at(pos).map(|category| (pos, category)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registry(\"{}\")", self)
    }
}
