//! Iterative-deepening A* search.

use std::time::{Duration, Instant};

use npuzzle_core::{Board, BoardState, Direction, StateArena, StateId};

use crate::Solution;

/// Errors returned by [`IdaStarSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The target board has a different side length than the initial board.
    #[display("dimension mismatch: initial board is {initial}x{initial}, target is {target}x{target}")]
    DimensionMismatch {
        /// Side length of the initial board.
        initial: usize,
        /// Side length of the target board.
        target: usize,
    },
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    nodes_explored: u64,
    iterations: u32,
    initial_bound: u32,
    final_bound: u32,
    elapsed: Duration,
}

impl SearchStats {
    /// Returns the number of states visited, pruned ones and the root included.
    #[must_use]
    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Returns the number of bounded depth-first passes.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the `f` value of the initial state, the first bound tried.
    #[must_use]
    pub fn initial_bound(&self) -> u32 {
        self.initial_bound
    }

    /// Returns the bound of the pass that found the goal.
    ///
    /// When the target is the canonical solved board this equals the optimal
    /// number of moves.
    #[must_use]
    pub fn final_bound(&self) -> u32 {
        self.final_bound
    }

    /// Returns the wall-clock time spent searching.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Finds optimal solutions with iterative-deepening A*.
///
/// Each pass is a depth-first search that prunes every state whose `f`
/// exceeds the current bound. If a pass finds no goal, the next bound is the
/// smallest `f` among the pruned states. Because every slide costs one and the
/// Manhattan heuristic never overestimates, the first goal found has minimal
/// `g`.
///
/// Children are expanded in the order right, left, up, down, so the number of
/// visited states and the returned path are reproducible.
///
/// The solver holds no state; every call to [`solve`](Self::solve) owns its
/// own search tree and counters.
///
/// # Examples
///
/// ```
/// use npuzzle_core::{Board, BoardState};
/// use npuzzle_solver::IdaStarSolver;
///
/// let target = Board::solved(3)?;
/// let initial = BoardState::new(vec![3, 1, 2, 4, 0, 5, 6, 7, 8])?;
///
/// let solution = IdaStarSolver::new().solve(initial.clone(), &target)?;
/// assert_eq!(solution.optimal_move_count(), 2);
/// assert_eq!(solution.goal().board(), &target);
/// assert_eq!(solution.states().last().unwrap().board(), initial.board());
/// assert!(solution.nodes_explored() > solution.optimal_move_count() as u64);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct IdaStarSolver {}

impl IdaStarSolver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Searches for a shortest sequence of slides from `initial` to `target`.
    ///
    /// Blocks until a solution is found. `initial` becomes the root of the
    /// search tree; any parent link it carries is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] if the boards have different
    /// side lengths.
    ///
    /// # Optimality
    ///
    /// The heuristic measures the distance to [`Board::solved`]. The returned
    /// path is guaranteed to be shortest when `target` is that canonical
    /// board; for other targets it is a valid path but may be longer.
    ///
    /// # Termination
    ///
    /// If `target` is not reachable from `initial` (the permutation parity
    /// differs) this method never returns. Check with
    /// [`npuzzle_core::is_solvable`] beforehand when the input is untrusted.
    pub fn solve(&self, initial: BoardState, target: &Board) -> Result<Solution, SolveError> {
        let dimension = initial.board().dimension();
        if dimension != target.dimension() {
            return Err(SolveError::DimensionMismatch {
                initial: dimension,
                target: target.dimension(),
            });
        }

        let started = Instant::now();
        let root_state = BoardState::root(initial.board().clone());
        let initial_bound = root_state.f();

        let mut search = Search {
            arena: StateArena::new(),
            target,
            nodes_explored: 0,
        };
        let root = search.arena.push(root_state);

        let mut bound = initial_bound;
        let mut iterations = 0;
        let goal = loop {
            iterations += 1;
            log::debug!(
                "IDA* pass {iterations}: bound={bound}, nodes_explored={}",
                search.nodes_explored
            );
            match search.visit(root, bound) {
                Visit::Found(goal) => break goal,
                Visit::Pruned(next_bound) => {
                    debug_assert!(next_bound > bound);
                    bound = next_bound;
                }
            }
        };

        let stats = SearchStats {
            nodes_explored: search.nodes_explored,
            iterations,
            initial_bound,
            final_bound: bound,
            elapsed: started.elapsed(),
        };
        log::info!(
            "IDA* found a {}-move solution: nodes_explored={}, passes={}, elapsed={:?}",
            search.arena[goal].g(),
            stats.nodes_explored,
            stats.iterations,
            stats.elapsed
        );
        Ok(Solution::from_goal(search.arena, goal, stats))
    }
}

/// Outcome of a bounded depth-first visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    /// The target was reached; the arena holds exactly the path to it.
    Found(StateId),
    /// No goal under the bound; carries the smallest `f` that exceeded it.
    Pruned(u32),
}

/// Mutable state of a single `solve` call.
#[derive(Debug)]
struct Search<'a> {
    arena: StateArena,
    target: &'a Board,
    nodes_explored: u64,
}

impl Search<'_> {
    fn visit(&mut self, id: StateId, bound: u32) -> Visit {
        self.nodes_explored += 1;

        let state = &self.arena[id];
        if state.f() > bound {
            return Visit::Pruned(state.f());
        }
        if state.is(self.target) {
            return Visit::Found(id);
        }

        let mut next_bound = u32::MAX;
        let mark = self.arena.len();
        for direction in Direction::ALL {
            let Some(child) = self.arena[id].child(direction, id) else {
                continue;
            };
            let child = self.arena.push(child);
            match self.visit(child, bound) {
                Visit::Found(goal) => return Visit::Found(goal),
                Visit::Pruned(f) => next_bound = next_bound.min(f),
            }
            self.arena.truncate(mark);
        }
        Visit::Pruned(next_bound)
    }
}
