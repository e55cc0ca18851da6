//! Test utilities for solver behavior.
//!
//! This module provides ground-truth helpers ([`bfs_distance`],
//! [`random_walk`]) and [`SolveTester`], a fluent harness that solves a puzzle
//! and checks the result.
//!
//! # Example
//!
//! ```
//! # use npuzzle_solver::testing::SolveTester;
//! SolveTester::from_str("
//!     1 2 .
//!     3 4 5
//!     6 7 8
//! ")
//! .solve()
//! .assert_move_count(2)
//! .assert_optimal()
//! .assert_replays_to_target();
//! ```

use std::collections::{HashSet, VecDeque};

use npuzzle_core::{Board, BoardState};
use rand::Rng;

use crate::{IdaStarSolver, Solution};

/// Returns the length of a shortest slide sequence from `start` to `target`,
/// found by breadth-first search.
///
/// Gives up and returns `None` once every board within `max_depth` slides has
/// been seen without reaching `target`.
///
/// # Examples
///
/// ```
/// use npuzzle_core::Board;
/// use npuzzle_solver::testing::bfs_distance;
///
/// let target = Board::solved(2)?;
/// let start: Board = "1 3 2 0".parse().unwrap();
/// assert_eq!(bfs_distance(&start, &target, 10), Some(2));
/// assert_eq!(bfs_distance(&start, &target, 1), None);
/// # Ok::<(), npuzzle_core::BoardError>(())
/// ```
#[must_use]
pub fn bfs_distance(start: &Board, target: &Board, max_depth: usize) -> Option<usize> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start.clone(), 0)]);
    while let Some((board, depth)) = queue.pop_front() {
        if board == *target {
            return Some(depth);
        }
        if depth == max_depth {
            continue;
        }
        for dir in board.legal_directions() {
            let Some(next) = board.slid(dir) else {
                continue;
            };
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Applies `steps` random slides to `board`.
///
/// The result is always reachable from `board`, so it is a safe input for
/// the solver.
#[must_use]
pub fn random_walk<R>(board: &Board, rng: &mut R, steps: usize) -> Board
where
    R: Rng + ?Sized,
{
    let mut state = BoardState::root(board.clone());
    for _ in 0..steps {
        state = state.random_successor(rng);
    }
    state.board().clone()
}

/// A test harness that solves a puzzle and asserts properties of the result.
///
/// All assertion methods return `self` for chaining and use
/// `#[track_caller]`, so failures point at the calling test.
#[derive(Debug)]
pub struct SolveTester {
    initial: Board,
    target: Board,
    solution: Option<Solution>,
}

impl SolveTester {
    /// Creates a tester solving `initial` towards the canonical solved board.
    ///
    /// # Panics
    ///
    /// Panics if the dimension is unsupported.
    #[track_caller]
    pub fn new(initial: Board) -> Self {
        let target = Board::solved(initial.dimension()).unwrap();
        Self {
            initial,
            target,
            solution: None,
        }
    }

    /// Creates a tester from text in the [`Board`] text format.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let board = s.parse().unwrap();
        Self::new(board)
    }

    /// Runs the solver.
    ///
    /// # Panics
    ///
    /// Panics if the solver reports an error.
    #[track_caller]
    #[must_use]
    pub fn solve(mut self) -> Self {
        let solution = IdaStarSolver::new()
            .solve(BoardState::root(self.initial.clone()), &self.target)
            .unwrap();
        self.solution = Some(solution);
        self
    }

    #[track_caller]
    fn solution(&self) -> &Solution {
        self.solution
            .as_ref()
            .expect("call `solve` before asserting on the solution")
    }

    /// Asserts the number of slides in the solution.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    #[track_caller]
    pub fn assert_move_count(self, expected: usize) -> Self {
        let actual = self.solution().optimal_move_count();
        assert_eq!(
            actual, expected,
            "move count mismatch for\n{}\nsolution moves: {:?}",
            self.initial,
            self.solution().moves()
        );
        self
    }

    /// Asserts that the solution is as short as the breadth-first distance.
    ///
    /// # Panics
    ///
    /// Panics if a shorter path exists.
    #[track_caller]
    pub fn assert_optimal(self) -> Self {
        let actual = self.solution().optimal_move_count();
        let expected = bfs_distance(&self.initial, &self.target, actual);
        assert_eq!(
            expected,
            Some(actual),
            "solution is not optimal for\n{}",
            self.initial
        );
        self
    }

    /// Asserts that the path starts at the initial board, ends at the target,
    /// and that replaying the moves reproduces it.
    ///
    /// # Panics
    ///
    /// Panics if any of these does not hold.
    #[track_caller]
    pub fn assert_replays_to_target(self) -> Self {
        let solution = self.solution();
        assert_eq!(solution.initial().board(), &self.initial);
        assert_eq!(solution.goal().board(), &self.target);

        let mut board = self.initial.clone();
        for (dir, expected) in solution.moves().into_iter().zip(solution.playback().skip(1)) {
            board = board
                .slid(dir)
                .unwrap_or_else(|| panic!("illegal move {dir} on\n{board}"));
            assert_eq!(&board, expected);
        }
        assert_eq!(board, self.target);
        self
    }

    /// Asserts the number of visited states.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    #[track_caller]
    pub fn assert_nodes_explored(self, expected: u64) -> Self {
        assert_eq!(self.solution().nodes_explored(), expected);
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_bfs_distance_on_solved() {
        let target = Board::solved(3).unwrap();
        assert_eq!(bfs_distance(&target, &target, 0), Some(0));
    }

    #[test]
    fn test_bfs_distance_respects_limit() {
        let target = Board::solved(3).unwrap();
        let start: Board = "1 2 0 3 4 5 6 7 8".parse().unwrap();
        assert_eq!(bfs_distance(&start, &target, 2), Some(2));
        assert_eq!(bfs_distance(&start, &target, 1), None);
    }

    #[test]
    fn test_random_walk_is_reproducible() {
        let target = Board::solved(4).unwrap();
        let a = random_walk(&target, &mut Pcg64Mcg::seed_from_u64(9), 30);
        let b = random_walk(&target, &mut Pcg64Mcg::seed_from_u64(9), 30);
        assert_eq!(a, b);
        assert_eq!(random_walk(&target, &mut Pcg64Mcg::seed_from_u64(9), 0), target);
    }

    #[test]
    fn test_tester_chain() {
        SolveTester::from_str(". 1 2 3 4 5 6 7 8")
            .solve()
            .assert_move_count(0)
            .assert_nodes_explored(1)
            .assert_replays_to_target();

        SolveTester::from_str("1 2 . 3 4 5 6 7 8")
            .solve()
            .assert_move_count(2)
            .assert_nodes_explored(4)
            .assert_optimal();
    }

    #[test]
    #[should_panic(expected = "move count mismatch")]
    fn test_tester_reports_mismatch() {
        let _ = SolveTester::from_str("1 . 2 3 4 5 6 7 8")
            .solve()
            .assert_move_count(3);
    }
}
