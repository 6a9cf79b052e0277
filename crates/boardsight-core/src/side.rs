//! Which side a piece belongs to.

use std::fmt;

/// The side a piece plays for: the tracked side or the generic opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Own,
    Opponent,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Own => write!(f, "own"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}
