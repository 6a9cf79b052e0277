//! King move generation.

use crate::position::Position;
use crate::registry::Registry;

use super::{MoveSet, step_targets};

/// The eight neighbouring offsets, row-major from the top-left.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Generate king targets: every neighbouring square that is empty or holds
/// the opponent.
pub fn king_moves(origin: Position, registry: &Registry) -> MoveSet {
    step_targets(origin, &KING_OFFSETS, registry)
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::position::Position;
    use crate::registry::Registry;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn centre_reaches_eight_in_order() {
        let moves = king_moves(pos(4, 4), &Registry::new());
        assert_eq!(
            moves.quiet().to_vec(),
            vec![
                pos(3, 3), pos(3, 4), pos(3, 5),
                pos(4, 3), pos(4, 5),
                pos(5, 3), pos(5, 4), pos(5, 5),
            ]
        );
    }

    #[test]
    fn corner_reaches_three() {
        let moves = king_moves(pos(0, 0), &Registry::new());
        assert_eq!(moves.quiet().to_vec(), vec![pos(0, 1), pos(1, 0), pos(1, 1)]);
    }

    #[test]
    fn partitions_neighbours() {
        // Opponent above, own rook left, uncategorized piece right.
        let registry: Registry = "8/8/8/4X3/3RK?2/8/8/8".parse().unwrap();
        let moves = king_moves(pos(4, 4), &registry);
        assert_eq!(moves.captures().to_vec(), vec![pos(3, 4)]);
        assert_eq!(
            moves.quiet().to_vec(),
            vec![pos(3, 3), pos(3, 5), pos(5, 3), pos(5, 4), pos(5, 5)]
        );
    }
}
