//! Pawn move generation.

use crate::position::Position;
use crate::registry::{Registry, Target};

use super::MoveSet;

/// Row step of every pawn. There is no side-dependent direction.
pub const PAWN_FORWARD: i8 = 1;

/// Generate pawn targets: one square straight ahead when it is empty, and
/// the two forward diagonals (left first) when they hold the opponent.
///
/// No double step, en passant or promotion.
pub fn pawn_moves(origin: Position, registry: &Registry) -> MoveSet {
    let mut moves = MoveSet::new();

    if let Some(ahead) = origin.offset(PAWN_FORWARD, 0) {
        if registry.is_empty(ahead) {
            moves.quiet.push(ahead);
        }
    }

    for d_col in [-1, 1] {
        if let Some(diag) = origin.offset(PAWN_FORWARD, d_col) {
            if registry.classify(diag) == Target::Opponent {
                moves.captures.push(diag);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::category::PieceCategory;
    use crate::position::Position;
    use crate::registry::Registry;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn single_step_on_empty_board() {
        let moves = pawn_moves(pos(1, 3), &Registry::new());
        assert_eq!(moves.quiet().to_vec(), vec![pos(2, 3)]);
        assert!(moves.captures().is_empty());
    }

    #[test]
    fn blocked_by_opponent_ahead() {
        let registry: Registry = "8/3P4/3X4/8/8/8/8/8".parse().unwrap();
        let moves = pawn_moves(pos(1, 3), &registry);
        assert!(moves.is_empty(), "a pawn never captures straight ahead");
    }

    #[test]
    fn blocked_by_own_piece_ahead() {
        let registry: Registry = "8/3P4/3R4/8/8/8/8/8".parse().unwrap();
        assert!(pawn_moves(pos(1, 3), &registry).is_empty());
    }

    #[test]
    fn diagonals_only_capture_opponents() {
        let registry: Registry = "8/3P4/2N1X3/8/8/8/8/8".parse().unwrap();
        let moves = pawn_moves(pos(1, 3), &registry);
        assert_eq!(moves.quiet().to_vec(), vec![pos(2, 3)]);
        assert_eq!(moves.captures().to_vec(), vec![pos(2, 4)]);
    }

    #[test]
    fn edge_column_has_one_diagonal() {
        let mut registry = Registry::new();
        registry.register(pos(4, 1), PieceCategory::Opponent).unwrap();
        let moves = pawn_moves(pos(3, 0), &registry);
        assert_eq!(moves.captures().to_vec(), vec![pos(4, 1)]);
        assert_eq!(moves.quiet().to_vec(), vec![pos(4, 0)]);
    }

    #[test]
    fn last_row_has_no_moves() {
        let registry: Registry = "8/8/8/8/8/8/8/8".parse().unwrap();
        assert!(pawn_moves(pos(7, 4), &registry).is_empty());
    }

    #[test]
    fn never_moves_backward_or_sideways() {
        let registry: Registry = "8/8/8/2XXX3/2X1X3/2XXX3/8/8".parse().unwrap();
        let moves = pawn_moves(pos(4, 3), &registry);
        assert!(moves.quiet().is_empty());
        assert_eq!(moves.captures().to_vec(), vec![pos(5, 2), pos(5, 4)]);
    }
}
