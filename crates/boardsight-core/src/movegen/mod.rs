//! Pseudo-legal move generation for a single selected piece.
//!
//! Every generator is a pure function of the origin and the registry. The
//! output keeps a fixed order: direction order per piece kind, then
//! increasing distance within a direction.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::category::PieceCategory;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::registry::{Registry, Target};

pub use self::king::{KING_OFFSETS, king_moves};
pub use self::knights::{KNIGHT_OFFSETS, knight_moves};
pub use self::pawns::{PAWN_FORWARD, pawn_moves};
pub use self::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, bishop_moves, queen_moves, rook_moves};

/// Capacity of a [`SquareList`]. A queen reaches at most 27 squares.
const LIST_CAPACITY: usize = 32;

/// Stack-allocated, ordered list of target squares.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Option<Position>; LIST_CAPACITY],
    len: u8,
}

impl SquareList {
    /// Create an empty list.
    pub const fn new() -> SquareList {
        SquareList {
            squares: [None; LIST_CAPACITY],
            len: 0,
        }
    }

    /// Append a square.
    #[inline]
    pub fn push(&mut self, pos: Position) {
        debug_assert!((self.len as usize) < LIST_CAPACITY);
        self.squares[self.len as usize] = Some(pos);
        self.len += 1;
    }

    /// Append every square of `other`, keeping its order.
    pub fn extend_from(&mut self, other: &SquareList) {
        for pos in other.iter() {
            self.push(pos);
        }
    }

    /// Return the number of squares in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `pos` is in the list.
    pub fn contains(&self, pos: Position) -> bool {
        self.iter().any(|p| p == pos)
    }

    /// Iterate over the squares in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.squares[..self.len as usize].iter().flatten().copied()
    }

    /// Copy the squares into a `Vec`.
    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SquareList {}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// The targets of one piece: quiet moves onto empty squares and captures of
/// the opponent marker. The two lists are disjoint and never hold the origin.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MoveSet {
    quiet: SquareList,
    captures: SquareList,
}

impl MoveSet {
    /// Create an empty move set.
    pub const fn new() -> MoveSet {
        MoveSet {
            quiet: SquareList::new(),
            captures: SquareList::new(),
        }
    }

    /// Squares the piece can move to, in generation order.
    #[inline]
    pub fn quiet(&self) -> &SquareList {
        &self.quiet
    }

    /// Squares the piece can capture on, in generation order.
    #[inline]
    pub fn captures(&self) -> &SquareList {
        &self.captures
    }

    /// Total number of targets.
    #[inline]
    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len()
    }

    /// Return `true` if the piece has no targets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    /// Return `true` if `pos` is a quiet move or a capture.
    pub fn contains(&self, pos: Position) -> bool {
        self.quiet.contains(pos) || self.captures.contains(pos)
    }

    /// Append `other`: its quiet moves after ours, its captures after ours.
    pub fn append(&mut self, other: &MoveSet) {
        self.quiet.extend_from(&other.quiet);
        self.captures.extend_from(&other.captures);
    }

    /// Record a single-step target. Blocked squares are dropped.
    ///
    /// Returns the classification so ray casts can stop on occupied squares.
    #[inline]
    fn add_target(&mut self, registry: &Registry, pos: Position) -> Target {
        let target = registry.classify(pos);
        match target {
            Target::Empty => self.quiet.push(pos),
            Target::Opponent => self.captures.push(pos),
            Target::Blocked => {}
        }
        target
    }
}

/// Generate the targets of a tracked-side piece of `kind` standing on `origin`.
pub fn moves_for_kind(kind: PieceKind, origin: Position, registry: &Registry) -> MoveSet {
    match kind {
        PieceKind::Pawn => pawn_moves(origin, registry),
        PieceKind::Knight => knight_moves(origin, registry),
        PieceKind::Bishop => bishop_moves(origin, registry),
        PieceKind::Rook => rook_moves(origin, registry),
        PieceKind::Queen => queen_moves(origin, registry),
        PieceKind::King => king_moves(origin, registry),
    }
}

/// Generate the targets of a piece of `category` standing on `origin`.
///
/// Total over every origin and category: the opponent marker and
/// uncategorized pieces have no moves and yield an empty set.
pub fn compute_moves(category: PieceCategory, origin: Position, registry: &Registry) -> MoveSet {
    let moves = match category.kind() {
        Some(kind) => moves_for_kind(kind, origin, registry),
        None => MoveSet::new(),
    };
    trace!(
        %category,
        %origin,
        quiet = moves.quiet().len(),
        captures = moves.captures().len(),
        "computed moves"
    );
    moves
}

/// Add every in-bounds target among `offsets` from `origin`.
fn step_targets(origin: Position, offsets: &[(i8, i8)], registry: &Registry) -> MoveSet {
    let mut moves = MoveSet::new();
    for &(d_row, d_col) in offsets {
        if let Some(pos) = origin.offset(d_row, d_col) {
            moves.add_target(registry, pos);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::{MoveSet, SquareList, compute_moves};
    use crate::category::PieceCategory;
    use crate::position::Position;
    use crate::registry::Registry;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn square_list_keeps_order() {
        let mut list = SquareList::new();
        list.push(pos(1, 1));
        list.push(pos(0, 0));
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_vec(), vec![pos(1, 1), pos(0, 0)]);
        assert!(list.contains(pos(0, 0)));
        assert!(!list.contains(pos(2, 2)));
    }

    #[test]
    fn markers_have_no_moves() {
        let registry = Registry::new();
        for category in [PieceCategory::None, PieceCategory::Opponent] {
            let moves = compute_moves(category, pos(3, 3), &registry);
            assert!(moves.is_empty(), "{category:?} should not move");
        }
    }

    #[test]
    fn append_concatenates_per_list() {
        let mut registry = Registry::new();
        registry.register(pos(1, 0), PieceCategory::Opponent).unwrap();
        registry.register(pos(0, 2), PieceCategory::Opponent).unwrap();

        let mut first = MoveSet::new();
        first.add_target(&registry, pos(0, 1));
        first.add_target(&registry, pos(1, 0));
        let mut second = MoveSet::new();
        second.add_target(&registry, pos(1, 1));
        second.add_target(&registry, pos(0, 2));

        first.append(&second);
        assert_eq!(first.quiet().to_vec(), vec![pos(0, 1), pos(1, 1)]);
        assert_eq!(first.captures().to_vec(), vec![pos(1, 0), pos(0, 2)]);
        assert_eq!(first.len(), 4);
    }
}
