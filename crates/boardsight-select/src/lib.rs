//! Selection orchestration: turns pointer input into highlighted move sets.

pub mod error;
pub mod geometry;
pub mod highlight;
pub mod session;

pub use error::{HighlightError, SetupError};
pub use geometry::{Point, Tile, TileGrid};
pub use highlight::{Highlighter, Mark, Overlay};
pub use session::{ClickOutcome, Session};
