use std::io;

use npuzzle_core::BoardError;
use npuzzle_game::GameError;

/// Errors reported by [`run`](crate::run).
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The requested board is malformed.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// The game session rejected the puzzle.
    #[display("{_0}")]
    Game(#[from] GameError),
    /// Writing the report failed.
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Returns the process exit code for this error.
    ///
    /// `1` means the puzzle cannot be solved (or output failed), `2` means
    /// the input was invalid.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Game(GameError::Unsolvable) | Self::Io(_) => 1,
            Self::Board(_) | Self::Game(_) => 2,
        }
    }
}
