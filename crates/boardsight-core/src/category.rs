//! Piece categories as stored in the occupancy registry.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::side::Side;

/// What occupies a square.
///
/// The six movement kinds belong to the tracked side. `Opponent` is a
/// kindless marker that every generator may capture. `None` is an occupying
/// piece with no category: it blocks like a friendly piece and has no moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceCategory {
    None,
    Pawn,
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Opponent,
}

impl PieceCategory {
    /// All categories in declaration order.
    pub const ALL: [PieceCategory; 8] = [
        PieceCategory::None,
        PieceCategory::Pawn,
        PieceCategory::King,
        PieceCategory::Queen,
        PieceCategory::Rook,
        PieceCategory::Bishop,
        PieceCategory::Knight,
        PieceCategory::Opponent,
    ];

    /// The tracked side's category for a movement kind.
    #[inline]
    pub const fn from_kind(kind: PieceKind) -> PieceCategory {
        match kind {
            PieceKind::Pawn => PieceCategory::Pawn,
            PieceKind::Knight => PieceCategory::Knight,
            PieceKind::Bishop => PieceCategory::Bishop,
            PieceKind::Rook => PieceCategory::Rook,
            PieceKind::Queen => PieceCategory::Queen,
            PieceKind::King => PieceCategory::King,
        }
    }

    /// Return the movement kind, if this category has one.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            PieceCategory::Pawn => Some(PieceKind::Pawn),
            PieceCategory::King => Some(PieceKind::King),
            PieceCategory::Queen => Some(PieceKind::Queen),
            PieceCategory::Rook => Some(PieceKind::Rook),
            PieceCategory::Bishop => Some(PieceKind::Bishop),
            PieceCategory::Knight => Some(PieceKind::Knight),
            PieceCategory::None | PieceCategory::Opponent => None,
        }
    }

    /// Return the side, if this category has one. `None` pieces are sideless.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            PieceCategory::None => None,
            PieceCategory::Opponent => Some(Side::Opponent),
            _ => Some(Side::Own),
        }
    }

    /// Return `true` for the generic opponent marker.
    #[inline]
    pub const fn is_opponent(self) -> bool {
        matches!(self.side(), Some(Side::Opponent))
    }

    /// Return the layout character: the kind letter for own pieces, `X` for
    /// the opponent marker and `?` for an uncategorized piece.
    pub fn layout_char(self) -> char {
        match self.kind() {
            Some(kind) => kind.letter(),
            None if self.is_opponent() => 'X',
            None => '?',
        }
    }

    /// Parse a layout character (case-insensitive for letters).
    pub fn from_layout_char(c: char) -> Option<PieceCategory> {
        match c.to_ascii_uppercase() {
            '?' => Some(PieceCategory::None),
            'X' => Some(PieceCategory::Opponent),
            other => PieceKind::from_letter(other).map(PieceCategory::from_kind),
        }
    }
}

impl From<PieceKind> for PieceCategory {
    fn from(kind: PieceKind) -> Self {
        PieceCategory::from_kind(kind)
    }
}

impl fmt::Display for PieceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind(), self.side()) {
            (Some(kind), _) => write!(f, "{kind}"),
            (None, Some(side)) => write!(f, "{side}"),
            (None, None) => f.write_str("none"),
        }
    }
}
