//! Command-line front end for the sliding-puzzle solver.
//!
//! [`run`] builds a puzzle from the [`Args`] (an explicit board or a seeded
//! shuffle), solves it optimally, and writes a progress report. The
//! `npuzzle` binary is a thin wrapper that parses the arguments and maps
//! [`AppError`] to an exit code.

use std::io::Write;

use npuzzle_game::Game;
use npuzzle_generator::{ShuffleSeed, Shuffler};
use npuzzle_solver::IdaStarSolver;

pub use self::{args::Args, error::AppError};

mod args;
mod error;
mod report;

/// Builds the puzzle described by `args`, solves it, and writes the report to
/// `out`.
///
/// # Errors
///
/// Returns an [`AppError`] if the puzzle is invalid or unsolvable, or if
/// writing to `out` fails.
pub fn run<W>(args: &Args, out: &mut W) -> Result<(), AppError>
where
    W: Write + ?Sized,
{
    let mut game = match &args.board {
        Some(board) => Game::from_board(board.clone())?,
        None => {
            let seed = args.seed.unwrap_or_else(ShuffleSeed::random);
            let puzzle = Shuffler::new(args.dimension)?
                .with_moves(args.shuffles)
                .generate_with_seed(seed);
            writeln!(out, "Seed: {seed}")?;
            Game::from_board(puzzle.start.board().clone())?
        }
    };

    report::write_puzzle(out, game.current())?;
    writeln!(out, "Solving puzzle using the IDA* algorithm...")?;
    let solution = game.solve(&IdaStarSolver::new())?;
    report::write_summary(out, solution)?;
    if args.play {
        report::write_playback(out, solution)?;
    }
    Ok(())
}
