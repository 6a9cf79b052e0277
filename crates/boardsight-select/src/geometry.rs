//! Tile geometry: maps board positions to render targets and pointer
//! coordinates back to positions.

use boardsight_core::Position;

use crate::error::HighlightError;

/// A point in scene coordinates. `y` grows with the row index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// Render target of one board square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// The square this tile draws.
    pub position: Position,
    /// Centre of the tile in scene coordinates.
    pub center: Point,
}

/// An 8x8 grid of square tiles anchored at `origin` (the top-left corner of
/// tile 0,0).
///
/// Individual tiles can be detached to model a scene that lacks them; such
/// positions fail to resolve.
#[derive(Debug, Clone, Copy)]
pub struct TileGrid {
    origin: Point,
    tile_size: f32,
    detached: [bool; Position::COUNT],
}

impl TileGrid {
    /// Create a grid of `tile_size` tiles anchored at the scene origin.
    pub fn new(tile_size: f32) -> TileGrid {
        TileGrid {
            origin: Point::default(),
            tile_size,
            detached: [false; Position::COUNT],
        }
    }

    /// Move the grid's top-left corner to `origin`.
    pub fn with_origin(mut self, origin: Point) -> TileGrid {
        self.origin = origin;
        self
    }

    /// Edge length of one tile.
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Change the edge length of every tile.
    pub fn set_tile_size(&mut self, tile_size: f32) {
        self.tile_size = tile_size;
    }

    /// Remove the tile for `position` from the scene.
    pub fn detach(&mut self, position: Position) {
        self.detached[position.index()] = true;
    }

    /// Resolve `position` to its tile.
    pub fn tile(&self, position: Position) -> Result<Tile, HighlightError> {
        if self.detached[position.index()] {
            return Err(HighlightError::Unresolved { position });
        }
        let half = self.tile_size / 2.0;
        let center = Point::new(
            self.origin.x + f32::from(position.col()) * self.tile_size + half,
            self.origin.y + f32::from(position.row()) * self.tile_size + half,
        );
        Ok(Tile { position, center })
    }

    /// Map a pointer coordinate to the position under it, if any.
    pub fn locate(&self, point: Point) -> Option<Position> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return None;
        }
        let col = ((point.x - self.origin.x) / self.tile_size).floor();
        let row = ((point.y - self.origin.y) / self.tile_size).floor();
        if !(col.is_finite() && row.is_finite()) {
            return None;
        }
        Position::from_raw(row as i32, col as i32)
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}
