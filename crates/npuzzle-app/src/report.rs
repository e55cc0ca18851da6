use std::io::{self, Write};

use npuzzle_core::Board;
use npuzzle_solver::Solution;

pub(crate) fn write_puzzle<W>(out: &mut W, board: &Board) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Puzzle:")?;
    writeln!(out, "{board}")?;
    writeln!(out)
}

pub(crate) fn write_summary<W>(out: &mut W, solution: &Solution) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Solution found")?;
    writeln!(
        out,
        "* Optimal solution is {} moves",
        solution.optimal_move_count()
    )?;
    writeln!(out, "* Nodes expanded: {}", solution.nodes_explored())?;
    writeln!(
        out,
        "* Time taken: {} milliseconds",
        solution.elapsed().as_millis()
    )
}

/// Writes each board from the initial one to the goal, labelled with the
/// blank movement that produced it.
pub(crate) fn write_playback<W>(out: &mut W, solution: &Solution) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let moves = solution.moves();
    for (step, board) in solution.playback().enumerate() {
        writeln!(out)?;
        match step.checked_sub(1).and_then(|i| moves.get(i)) {
            Some(dir) => writeln!(out, "Step {step} ({dir}):")?,
            None => writeln!(out, "Step {step}:")?,
        }
        writeln!(out, "{board}")?;
    }
    Ok(())
}
