//! Text front-end for boardsight: a command shell standing in for the
//! pointer input and highlight rendering of a graphical board.

pub mod command;
pub mod error;
pub mod render;
pub mod shell;

pub use command::{Command, ShellOption, parse_command};
pub use error::ShellError;
pub use shell::{Shell, ShellConfig};
