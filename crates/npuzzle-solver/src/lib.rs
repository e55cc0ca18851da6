//! Optimal sliding-tile puzzle solver.
//!
//! [`IdaStarSolver`] runs iterative-deepening A* with the Manhattan-distance
//! heuristic and returns a [`Solution`] holding the optimal path from the
//! initial state to the target.
//!
//! # Examples
//!
//! ```
//! use npuzzle_core::{Board, BoardState, Direction};
//! use npuzzle_solver::IdaStarSolver;
//!
//! let target = Board::solved(3)?;
//! let initial = BoardState::new(vec![1, 2, 0, 3, 4, 5, 6, 7, 8])?;
//!
//! let solution = IdaStarSolver::new().solve(initial, &target)?;
//! assert_eq!(solution.optimal_move_count(), 2);
//! assert_eq!(solution.moves(), [Direction::Left, Direction::Left]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Termination
//!
//! The solver does not check whether the target is reachable. Half of all
//! tile arrangements cannot be reached from a given start, and searching for
//! one of them never returns. Callers that accept arbitrary input should
//! run [`npuzzle_core::is_solvable`] first.

pub mod ida_star;
pub mod solution;
pub mod testing;

pub use self::{
    ida_star::{IdaStarSolver, SearchStats, SolveError},
    solution::Solution,
};
