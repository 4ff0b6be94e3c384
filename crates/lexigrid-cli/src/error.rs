use std::io;

use lexigrid_game::GameError;
use lexigrid_generator::GeneratorError;

use crate::dto::DtoError;

/// Errors reported by the `lexigrid` command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Reading or writing failed.
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    /// A puzzle file is not valid JSON.
    #[display("invalid JSON: {_0}")]
    Json(#[from] serde_json::Error),
    /// The generator configuration was rejected.
    #[display("invalid configuration: {_0}")]
    Config(#[from] GeneratorError),
    /// A puzzle file has a valid JSON shape but inconsistent contents.
    #[display("invalid puzzle: {_0}")]
    Puzzle(#[from] DtoError),
    /// The game rejected a selection, a found word or a hint request.
    #[display("rejected by the game: {_0}")]
    Game(#[from] GameError),
}
