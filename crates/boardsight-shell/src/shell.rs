//! Line-oriented command loop driving a board session.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use boardsight_core::{MoveSet, Registry, compute_moves};
use boardsight_select::{ClickOutcome, Overlay, Session, TileGrid};

use crate::command::{Command, ShellOption, parse_command};
use crate::error::ShellError;
use crate::render::{BoardView, format_squares};

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Print the board after every selection change.
    pub autoboard: bool,
    /// Tile edge length for pointer coordinates.
    pub tile_size: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            autoboard: false,
            tile_size: 1.0,
        }
    }
}

/// The command shell, holding the current session and configuration.
pub struct Shell {
    session: Session<Overlay>,
    config: ShellConfig,
}

impl Shell {
    /// Create a shell with an empty board.
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Create a shell whose board starts from `registry`.
    pub fn with_registry(registry: Registry) -> Self {
        let config = ShellConfig::default();
        let session = Session::with_registry(registry, TileGrid::new(config.tile_size), Overlay::new());
        Self { session, config }
    }

    #[inline]
    pub fn session(&self) -> &Session<Overlay> {
        &self.session
    }

    #[inline]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `out`.
    ///
    /// Malformed commands are logged and skipped. Only I/O failures end the
    /// loop with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), ShellError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error {e}")?;
                }
            }
            out.flush()?;
        }

        info!("boardsight shell shutting down");
        Ok(())
    }

    /// Execute a single parsed command.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ShellError> {
        match cmd {
            Command::New => self.reset(Registry::new()),
            Command::Layout(registry) => self.reset(registry),
            Command::Place { row, col, category } => {
                match self.session.place_at(row, col, category) {
                    Ok(pos) => writeln!(out, "placed {category} {pos}")?,
                    Err(e) => writeln!(out, "error {e}")?,
                }
            }
            Command::Moves { category, origin } => {
                let moves = compute_moves(category, origin, self.session.registry());
                write_moves(out, &moves)?;
            }
            Command::Click(target) => {
                let outcome = self.session.click(target);
                self.report(outcome, out)?;
            }
            Command::Point(point) => {
                let outcome = self.session.pointer(point);
                self.report(outcome, out)?;
            }
            Command::Board => self.write_board(out)?,
            Command::Set(option) => self.apply_option(option),
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    /// Replace the session, keeping the configured tile size.
    fn reset(&mut self, registry: Registry) {
        info!(pieces = registry.len(), "new board");
        let grid = TileGrid::new(self.config.tile_size);
        self.session = Session::with_registry(registry, grid, Overlay::new());
    }

    fn apply_option(&mut self, option: ShellOption) {
        match option {
            ShellOption::AutoBoard(on) => self.config.autoboard = on,
            ShellOption::TileSize(size) => {
                self.config.tile_size = size;
                self.session.grid_mut().set_tile_size(size);
            }
        }
        debug!(config = ?self.config, "configuration changed");
    }

    fn report<W: Write>(&self, outcome: ClickOutcome, out: &mut W) -> Result<(), ShellError> {
        match outcome {
            ClickOutcome::Selected {
                origin,
                category,
                moves,
            } => {
                writeln!(out, "selected {category} {origin}")?;
                write_moves(out, &moves)?;
            }
            ClickOutcome::Deselected => writeln!(out, "deselected")?,
            ClickOutcome::Ignored => return Ok(()),
        }
        if self.config.autoboard {
            self.write_board(out)?;
        }
        Ok(())
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        let view = BoardView {
            registry: self.session.registry(),
            overlay: self.session.highlighter(),
            selected: self.session.selected(),
        };
        writeln!(out, "{view}")?;
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

fn write_moves<W: Write>(out: &mut W, moves: &MoveSet) -> Result<(), ShellError> {
    writeln!(out, "quiet {}", format_squares(moves.quiet()))?;
    writeln!(out, "captures {}", format_squares(moves.captures()))?;
    Ok(())
}
