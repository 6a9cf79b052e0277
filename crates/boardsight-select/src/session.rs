//! A board session: owns the registry, the current selection and the
//! highlight layer, and reacts to clicks.

use tracing::{debug, info, warn};

use boardsight_core::{MoveSet, PieceCategory, Position, Registry, compute_moves};

use crate::error::{HighlightError, SetupError};
use crate::geometry::{Point, Tile, TileGrid};
use crate::highlight::Highlighter;

/// What a click did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected and its moves highlighted.
    Selected {
        origin: Position,
        category: PieceCategory,
        moves: MoveSet,
    },
    /// The previous selection was dropped and its highlights cleared.
    Deselected,
    /// Nothing was selected and nothing was hit.
    Ignored,
}

/// One board with its pieces, selection and highlights.
///
/// The registry is filled through [`place`](Session::place) and never
/// changes afterwards: selecting a piece does not move it.
pub struct Session<H> {
    registry: Registry,
    grid: TileGrid,
    highlighter: H,
    selected: Option<Position>,
}

impl<H: Highlighter> Session<H> {
    /// Create a session with an empty board.
    pub fn new(grid: TileGrid, highlighter: H) -> Self {
        Self::with_registry(Registry::new(), grid, highlighter)
    }

    /// Create a session around an already populated registry.
    pub fn with_registry(registry: Registry, grid: TileGrid, highlighter: H) -> Self {
        Self {
            registry,
            grid,
            highlighter,
            selected: None,
        }
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    #[inline]
    pub fn highlighter(&self) -> &H {
        &self.highlighter
    }

    /// The currently selected square, if any.
    #[inline]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Register a piece during setup.
    pub fn place(&mut self, position: Position, category: PieceCategory) -> Result<(), SetupError> {
        self.registry.register(position, category).map_err(|e| {
            warn!(error = %e, "piece not placed");
            SetupError::from(e)
        })
    }

    /// Register a piece from raw coordinates, checking that its tile exists
    /// first. Nothing is registered when the tile is missing.
    pub fn place_at(&mut self, row: i32, col: i32, category: PieceCategory) -> Result<Position, SetupError> {
        let tile = Position::from_raw(row, col).and_then(|pos| self.grid.tile(pos).ok());
        let Some(tile) = tile else {
            warn!(row, col, %category, "tile location is invalid");
            return Err(SetupError::InvalidTile { row, col });
        };
        self.place(tile.position, category)?;
        Ok(tile.position)
    }

    /// Remove every highlight.
    pub fn clear_highlights(&mut self) {
        self.highlighter.clear_highlights();
    }

    /// Highlight `position` as a quiet move.
    pub fn show_quiet_move(&mut self, position: Position) -> Result<Tile, HighlightError> {
        let tile = self.grid.tile(position)?;
        self.highlighter.show_quiet_move(tile);
        Ok(tile)
    }

    /// Highlight `position` as a capture.
    pub fn show_capture(&mut self, position: Position) -> Result<Tile, HighlightError> {
        let tile = self.grid.tile(position)?;
        self.highlighter.show_capture(tile);
        Ok(tile)
    }

    /// Replace the highlights with the moves of a `category` piece on
    /// `origin`: captures first, then quiet moves.
    ///
    /// A square without a render target is logged and skipped; the rest of
    /// the batch is still drawn.
    pub fn show_moves(&mut self, category: PieceCategory, origin: Position) -> MoveSet {
        self.clear_highlights();
        let moves = compute_moves(category, origin, &self.registry);

        let mut skipped = 0usize;
        for pos in moves.captures().iter() {
            if let Err(e) = self.show_capture(pos) {
                warn!(error = %e, "capture highlight skipped");
                skipped += 1;
            }
        }
        for pos in moves.quiet().iter() {
            if let Err(e) = self.show_quiet_move(pos) {
                warn!(error = %e, "move highlight skipped");
                skipped += 1;
            }
        }

        debug!(
            %category,
            %origin,
            quiet = moves.quiet().len(),
            captures = moves.captures().len(),
            skipped,
            "highlighted moves"
        );
        moves
    }

    /// Handle a click on `target`, or on nothing when `target` is `None`.
    ///
    /// Clicking a piece selects it and shows its moves, clearing the
    /// highlights of a previously selected piece. Clicking anything else
    /// drops the selection, including an empty square on the board: an
    /// empty tile counts as a miss, the same as a point off the board.
    pub fn click(&mut self, target: Option<Position>) -> ClickOutcome {
        let hit = target.and_then(|pos| self.registry.category_at(pos).map(|category| (pos, category)));

        match hit {
            Some((origin, category)) => {
                if self.selected.is_some_and(|prev| prev != origin) {
                    self.clear_highlights();
                }
                self.selected = Some(origin);
                info!(%origin, %category, "piece selected");
                let moves = self.show_moves(category, origin);
                ClickOutcome::Selected {
                    origin,
                    category,
                    moves,
                }
            }
            None => {
                debug!(position = ?target, "nothing under pointer");
                if self.selected.take().is_some() {
                    self.clear_highlights();
                    ClickOutcome::Deselected
                } else {
                    ClickOutcome::Ignored
                }
            }
        }
    }

    /// Handle a pointer press at a scene coordinate.
    pub fn pointer(&mut self, point: Point) -> ClickOutcome {
        let target = self.grid.locate(point);
        self.click(target)
    }
}
