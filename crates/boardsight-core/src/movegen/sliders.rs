//! Sliding piece move generation (bishops, rooks, queens).

use crate::position::{BOARD_SIZE, Position};
use crate::registry::{Registry, Target};

use super::MoveSet;

/// Rook ray directions, in generation order.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop ray directions, in generation order.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Cast one ray per direction from `origin`.
///
/// Empty squares are quiet moves, nearest first. The first occupied square
/// ends the ray; it is a capture when it holds the opponent and is dropped
/// otherwise.
fn ray_moves(origin: Position, directions: &[(i8, i8)], registry: &Registry) -> MoveSet {
    let mut moves = MoveSet::new();
    for &(d_row, d_col) in directions {
        for step in 1..BOARD_SIZE {
            let Some(pos) = origin.offset(d_row * step, d_col * step) else {
                break;
            };
            if moves.add_target(registry, pos) != Target::Empty {
                break;
            }
        }
    }
    moves
}

/// Generate rook targets along rows and columns.
pub fn rook_moves(origin: Position, registry: &Registry) -> MoveSet {
    ray_moves(origin, &ROOK_DIRECTIONS, registry)
}

/// Generate bishop targets along diagonals.
pub fn bishop_moves(origin: Position, registry: &Registry) -> MoveSet {
    ray_moves(origin, &BISHOP_DIRECTIONS, registry)
}

/// Generate queen targets: the rook set followed by the bishop set.
pub fn queen_moves(origin: Position, registry: &Registry) -> MoveSet {
    let mut moves = rook_moves(origin, registry);
    moves.append(&bishop_moves(origin, registry));
    moves
}

#[cfg(test)]
mod tests {
    use super::{bishop_moves, queen_moves, rook_moves};
    use crate::position::Position;
    use crate::registry::Registry;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn rook_rays_in_direction_order() {
        let moves = rook_moves(pos(6, 1), &Registry::new());
        assert_eq!(
            moves.quiet().to_vec(),
            vec![
                pos(7, 1),
                pos(5, 1), pos(4, 1), pos(3, 1), pos(2, 1), pos(1, 1), pos(0, 1),
                pos(6, 2), pos(6, 3), pos(6, 4), pos(6, 5), pos(6, 6), pos(6, 7),
                pos(6, 0),
            ]
        );
    }

    #[test]
    fn rook_stops_at_blockers() {
        // Opponent two squares down, own knight one square right.
        let registry: Registry = "8/8/8/3RN3/8/3X4/8/8".parse().unwrap();
        let moves = rook_moves(pos(3, 3), &registry);
        assert_eq!(moves.captures().to_vec(), vec![pos(5, 3)]);
        assert!(!moves.contains(pos(6, 3)), "ray must stop at the capture");
        assert!(!moves.contains(pos(3, 4)));
        assert!(!moves.contains(pos(3, 5)), "ray must stop at an own piece");
        assert_eq!(
            moves.quiet().to_vec(),
            vec![
                pos(4, 3),
                pos(2, 3), pos(1, 3), pos(0, 3),
                pos(3, 2), pos(3, 1), pos(3, 0),
            ]
        );
    }

    #[test]
    fn bishop_rays_in_direction_order() {
        let moves = bishop_moves(pos(1, 1), &Registry::new());
        assert_eq!(
            moves.quiet().to_vec(),
            vec![
                pos(2, 2), pos(3, 3), pos(4, 4), pos(5, 5), pos(6, 6), pos(7, 7),
                pos(2, 0),
                pos(0, 2),
                pos(0, 0),
            ]
        );
    }

    #[test]
    fn queen_is_rook_then_bishop() {
        let registry: Registry = "8/8/2X5/8/4Q3/8/8/4X2X".parse().unwrap();
        let origin = pos(4, 4);
        let rook = rook_moves(origin, &registry);
        let bishop = bishop_moves(origin, &registry);
        let queen = queen_moves(origin, &registry);

        let mut quiet = rook.quiet().to_vec();
        quiet.extend(bishop.quiet().iter());
        let mut captures = rook.captures().to_vec();
        captures.extend(bishop.captures().iter());

        assert_eq!(queen.quiet().to_vec(), quiet);
        assert_eq!(queen.captures().to_vec(), captures);
        assert_eq!(captures, vec![pos(7, 4), pos(7, 7), pos(2, 2)]);
    }
}
