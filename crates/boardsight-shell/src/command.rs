//! Shell command parsing.

use boardsight_core::{PieceCategory, Position, Registry};
use boardsight_select::Point;

use crate::error::ShellError;

/// A `set` option and its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellOption {
    /// Print the board after every selection change.
    AutoBoard(bool),
    /// Tile edge length used to map `point` coordinates to squares.
    TileSize(f32),
}

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over with an empty board.
    New,
    /// `layout <placement>` -- start over with the given pieces.
    Layout(Registry),
    /// `place <row,col> <piece>` -- register one piece. Coordinates are
    /// kept raw so off-board tiles are reported by the session.
    Place {
        row: i32,
        col: i32,
        category: PieceCategory,
    },
    /// `moves <piece> <row,col>` -- list the targets of a piece.
    Moves {
        category: PieceCategory,
        origin: Position,
    },
    /// `click <row,col>` or `click none` -- select by square.
    Click(Option<Position>),
    /// `point <x> <y>` -- select by scene coordinate.
    Point(Point),
    /// `board` -- print the board with highlights.
    Board,
    /// `set <name> <value>` -- change a configuration option.
    Set(ShellOption),
    /// `quit` -- exit the shell.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "quit" => Ok(Command::Quit),
        "layout" => {
            let layout = arg(args, 0, "layout")?;
            Ok(Command::Layout(layout.parse()?))
        }
        "place" => {
            let (row, col) = parse_raw_pair(arg(args, 0, "place")?)?;
            let category = parse_piece(arg(args, 1, "place")?)?;
            Ok(Command::Place { row, col, category })
        }
        "moves" => {
            let category = parse_piece(arg(args, 0, "moves")?)?;
            let origin = parse_position(arg(args, 1, "moves")?)?;
            Ok(Command::Moves { category, origin })
        }
        "click" => match arg(args, 0, "click")? {
            "none" => Ok(Command::Click(None)),
            value => Ok(Command::Click(Some(parse_position(value)?))),
        },
        "point" => {
            let x = parse_float(arg(args, 0, "point")?)?;
            let y = parse_float(arg(args, 1, "point")?)?;
            Ok(Command::Point(Point::new(x, y)))
        }
        "set" => parse_set(args),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

/// Parse the `set` command arguments.
///
/// Supports `set autoboard on|off` and `set tile <size>`.
fn parse_set(args: &[&str]) -> Result<Command, ShellError> {
    let name = arg(args, 0, "set")?;
    let value = arg(args, 1, "set")?;

    let option = match name.to_ascii_lowercase().as_str() {
        "autoboard" => {
            let on = match value {
                "on" | "true" => true,
                "off" | "false" => false,
                _ => {
                    return Err(ShellError::InvalidOptionValue {
                        name: "autoboard",
                        value: value.to_string(),
                    });
                }
            };
            ShellOption::AutoBoard(on)
        }
        "tile" => {
            let size = parse_float(value)?;
            if !(size.is_finite() && size > 0.0) {
                return Err(ShellError::InvalidOptionValue {
                    name: "tile",
                    value: value.to_string(),
                });
            }
            ShellOption::TileSize(size)
        }
        _ => {
            return Err(ShellError::UnknownOption {
                name: name.to_string(),
            });
        }
    };

    Ok(Command::Set(option))
}

/// Fetch argument `index` of `command`.
fn arg<'a>(args: &[&'a str], index: usize, command: &'static str) -> Result<&'a str, ShellError> {
    args.get(index)
        .copied()
        .ok_or(ShellError::MissingArgument { command })
}

fn parse_position(value: &str) -> Result<Position, ShellError> {
    Position::parse(value).ok_or_else(|| ShellError::InvalidPosition {
        value: value.to_string(),
    })
}

/// Parse `row,col` without checking that it is on the board.
fn parse_raw_pair(value: &str) -> Result<(i32, i32), ShellError> {
    let invalid = || ShellError::InvalidPosition {
        value: value.to_string(),
    };
    let (row, col) = value.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok((row, col))
}

fn parse_piece(value: &str) -> Result<PieceCategory, ShellError> {
    let mut chars = value.chars();
    let category = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceCategory::from_layout_char(c),
        _ => None,
    };
    category.ok_or_else(|| ShellError::InvalidPiece {
        value: value.to_string(),
    })
}

fn parse_float(value: &str) -> Result<f32, ShellError> {
    value.parse().map_err(|_| ShellError::InvalidNumber {
        value: value.to_string(),
    })
}
