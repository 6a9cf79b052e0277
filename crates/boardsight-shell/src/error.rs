//! Shell command errors.

use boardsight_core::LayoutError;

/// Errors that can occur while reading and parsing shell commands.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command was given too few arguments.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that was short of arguments.
        command: &'static str,
    },

    /// A `row,col` argument is malformed or off the board.
    #[error("invalid position: {value}")]
    InvalidPosition {
        /// The offending argument.
        value: String,
    },

    /// A piece argument is not a layout character.
    #[error("invalid piece: {value}")]
    InvalidPiece {
        /// The offending argument.
        value: String,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid number: {value}")]
    InvalidNumber {
        /// The offending argument.
        value: String,
    },

    /// The `layout` argument could not be parsed.
    #[error("invalid layout: {source}")]
    InvalidLayout {
        /// The underlying layout error.
        #[from]
        source: LayoutError,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave an option a value it does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
