//! Core board types: positions, piece categories, the occupancy registry,
//! and pseudo-legal move generation for a single piece.

mod category;
mod error;
mod layout;
pub mod movegen;
mod piece_kind;
mod position;
mod registry;
mod side;

pub use category::PieceCategory;
pub use error::{LayoutError, RegistryError};
pub use layout::EMPTY_LAYOUT;
pub use movegen::{MoveSet, SquareList, compute_moves};
pub use piece_kind::PieceKind;
pub use position::{BOARD_SIZE, Position, in_bounds};
pub use registry::{Registry, Target};
pub use side::Side;
