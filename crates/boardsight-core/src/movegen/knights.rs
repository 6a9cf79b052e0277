//! Knight move generation.

use crate::position::Position;
use crate::registry::Registry;

use super::{MoveSet, step_targets};

/// The eight L-shaped jumps, in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Generate knight targets. Knights jump, so nothing in between matters.
pub fn knight_moves(origin: Position, registry: &Registry) -> MoveSet {
    step_targets(origin, &KNIGHT_OFFSETS, registry)
}
